use sqlx::PgPool;
use storage::{
    dto::payout::{CreatePayoutRequest, PayoutBatchResponse},
    models::PayoutItemStatus,
    repository::{payout::PayoutRepository, tournament::TournamentRepository},
    services::prize,
};
use tokio::time::sleep;
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::state::PayoutDispatcher;

/// Split the pool 60/25/10/fee and pay the podium over M-Pesa, one B2C call
/// per winner with a fixed delay in between. Each payment's outcome is
/// recorded on its own; earlier successes stand even when a later call fails.
pub async fn create_payout(
    pool: &PgPool,
    dispatcher: &PayoutDispatcher,
    req: &CreatePayoutRequest,
) -> WebResult<PayoutBatchResponse> {
    let mut places: Vec<i32> = req.winners.iter().map(|w| w.place).collect();
    places.sort_unstable();
    if places != [1, 2, 3] {
        return Err(WebError::BadRequest(
            "winners must cover places 1, 2 and 3 exactly once".into(),
        ));
    }

    TournamentRepository::new(pool)
        .find_by_id(req.tournament_id)
        .await?;

    let split = prize::split(req.total_pool);

    // No batch is recorded when the token exchange itself fails; nothing has
    // been attempted yet at that point.
    let token = dispatcher.client.access_token().await?;

    let repo = PayoutRepository::new(pool);
    let batch = repo
        .create_batch(req.tournament_id, req.total_pool, &split)
        .await?;

    let mut winners = req.winners.clone();
    winners.sort_by_key(|w| w.place);

    let mut items = Vec::with_capacity(winners.len());
    let mut paid = 0;
    let mut failed = 0;

    for (i, winner) in winners.iter().enumerate() {
        if i > 0 {
            sleep(dispatcher.delay).await;
        }

        let amount = match winner.place {
            1 => split.first,
            2 => split.second,
            _ => split.third,
        };
        let remarks = format!("PES Arena prize, place {}", winner.place);

        let item = match dispatcher
            .client
            .b2c_payment(&token, &winner.phone, amount, &remarks)
            .await
        {
            Ok(ack) => {
                paid += 1;
                repo.record_item(
                    batch.batch_id,
                    winner.place,
                    winner.player_id,
                    &winner.phone,
                    amount,
                    PayoutItemStatus::Paid,
                    Some(&ack.conversation_id),
                    None,
                )
                .await?
            }
            Err(e) => {
                tracing::warn!(place = winner.place, error = %e, "B2C payment failed");
                failed += 1;
                repo.record_item(
                    batch.batch_id,
                    winner.place,
                    winner.player_id,
                    &winner.phone,
                    amount,
                    PayoutItemStatus::Failed,
                    None,
                    Some(&e.to_string()),
                )
                .await?
            }
        };

        items.push(item);
    }

    let batch = repo.finalize_counts(batch.batch_id, paid, failed).await?;

    tracing::info!(
        batch_id = %batch.batch_id,
        paid,
        failed,
        "payout batch finished"
    );

    Ok(PayoutBatchResponse::from_parts(batch, items))
}

pub async fn list_payouts(
    pool: &PgPool,
    tournament_id: Option<Uuid>,
) -> WebResult<Vec<PayoutBatchResponse>> {
    let repo = PayoutRepository::new(pool);
    let batches = repo.list(tournament_id).await?;

    Ok(batches
        .into_iter()
        .map(|(batch, items)| PayoutBatchResponse::from_parts(batch, items))
        .collect())
}

pub async fn get_payout(pool: &PgPool, batch_id: Uuid) -> WebResult<PayoutBatchResponse> {
    let repo = PayoutRepository::new(pool);
    let (batch, items) = repo.find_by_id(batch_id).await?;

    Ok(PayoutBatchResponse::from_parts(batch, items))
}
