use crate::context::CliContext;
use crate::output;

/// Sign-in already happened while the context loaded; report who it is.
pub async fn handle_login(ctx: &CliContext) -> anyhow::Result<()> {
    match ctx.app.gate().session() {
        Some(session) => {
            output::output_success(&session.user);
            Ok(())
        }
        None => anyhow::bail!("Login requires --backend, --email and --password"),
    }
}

pub async fn handle_signup(
    ctx: &mut CliContext,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    match ctx.app.sign_up(email, password).await? {
        Some(user) => output::output_success(serde_json::json!({
            "user": user,
            "confirmation_pending": false,
        })),
        None => output::output_success(serde_json::json!({
            "email": email,
            "confirmation_pending": true,
        })),
    }
    Ok(())
}
