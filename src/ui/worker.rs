use crate::api::ApiClient;
use crate::model::Record;
use crate::ui::events::{ApiOutcome, CollectionCommand, CollectionOutcome};
use tokio::sync::mpsc;

/// Spawn the worker task for one entity.
///
/// The worker drains its command channel and runs every request on its own
/// task, so repeated user actions issue concurrent requests. Outcomes are
/// posted to the shared UI event channel through `wrap`, which tags them
/// with the entity. Dropping the returned sender stops the worker.
pub fn spawn<R: Record>(
    client: ApiClient,
    events: mpsc::Sender<ApiOutcome>,
    wrap: fn(CollectionOutcome<R>) -> ApiOutcome,
) -> mpsc::Sender<CollectionCommand<R>> {
    let (tx, mut rx) = mpsc::channel::<CollectionCommand<R>>(32);

    tokio::spawn(async move {
        while let Some(command) = rx.recv().await {
            let client = client.clone();
            let events = events.clone();
            tokio::spawn(async move {
                let outcome = run_command(&client, command).await;
                if events.send(wrap(outcome)).await.is_err() {
                    tracing::debug!(resource = R::RESOURCE, "ui event channel closed");
                }
            });
        }
        tracing::debug!(resource = R::RESOURCE, "worker stopped");
    });

    tx
}

// Request futures borrow the command's draft across an await, so spawning
// them relies on `Record::Draft: Sync`. Checked at compile time below.
async fn run_command<R: Record>(
    client: &ApiClient,
    command: CollectionCommand<R>,
) -> CollectionOutcome<R> {
    match command {
        CollectionCommand::Fetch => CollectionOutcome::Fetched(client.list::<R>().await),
        CollectionCommand::Create { draft } => {
            CollectionOutcome::Created(client.create::<R>(&draft).await)
        }
        CollectionCommand::Update { id, draft } => {
            let result = client.update::<R>(&id, &draft).await;
            CollectionOutcome::Updated { id, draft, result }
        }
        CollectionCommand::Delete { id } => {
            let result = client.delete::<R>(&id).await;
            CollectionOutcome::Deleted { id, result }
        }
    }
}
