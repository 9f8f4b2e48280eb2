use crate::domain::repository::Mailer;
use crate::error::AccountsServiceError;

/// Stand-in delivery transport: writes the code to the log instead of
/// sending mail. Real SMTP wiring lives outside this service.
#[derive(Clone, Default)]
pub struct TracingMailer;

impl Mailer for TracingMailer {
    async fn send_code(&self, email: &str, code: &str) -> Result<(), AccountsServiceError> {
        tracing::info!(recipient = email, code, "one-time code issued");
        Ok(())
    }
}
