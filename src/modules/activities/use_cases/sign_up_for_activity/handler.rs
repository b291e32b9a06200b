use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::activities::core::activity::CapacityPolicy;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use crate::modules::activities::use_cases::sign_up_for_activity::decision::Decision;
use std::sync::Arc;
use tracing::info;

pub struct SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    capacity: CapacityPolicy,
}

impl<TStore> SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, capacity: CapacityPolicy) -> Self {
        Self { store, capacity }
    }

    pub async fn handle(&self, command: SignUpForActivity) -> Result<(), ApplicationError> {
        let activity_name = command.activity_name.clone();
        let email = command.email.clone();

        let Some(loaded) = self.store.load(&activity_name).await? else {
            info!(activity = %activity_name, "signup for unknown activity");
            return Err(ApplicationError::ActivityNotFound);
        };

        match decide_sign_up(&loaded.activity, command, self.capacity) {
            Decision::Accepted { events } => {
                let version = self
                    .store
                    .append(&activity_name, loaded.version, &events)
                    .await?;
                info!(activity = %activity_name, %email, version, "participant signed up");
                Ok(())
            }
            Decision::Rejected { reason } => {
                info!(
                    activity = %activity_name,
                    spots_left = loaded.activity.spots_left(),
                    %reason,
                    "signup rejected"
                );
                Err(ApplicationError::Domain(reason.to_string()))
            }
        }
    }
}
