use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use crate::modules::activities::use_cases::unregister_from_activity::decision::Decision;
use std::sync::Arc;
use tracing::info;

pub struct UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UnregisterFromActivity) -> Result<(), ApplicationError> {
        let activity_name = command.activity_name.clone();
        let email = command.email.clone();

        let Some(loaded) = self.store.load(&activity_name).await? else {
            info!(activity = %activity_name, "unregister from unknown activity");
            return Err(ApplicationError::ActivityNotFound);
        };

        match decide_unregister(&loaded.activity, command) {
            Decision::Accepted { events } => {
                let version = self
                    .store
                    .append(&activity_name, loaded.version, &events)
                    .await?;
                info!(activity = %activity_name, %email, version, "participant unregistered");
                Ok(())
            }
            Decision::Rejected { reason } => {
                info!(activity = %activity_name, %reason, "unregister rejected");
                Err(ApplicationError::Domain(reason.to_string()))
            }
        }
    }
}
