use crate::cli::ShareArgs;
use crate::context::CliContext;
use crate::output;
use serde::Serialize;

#[derive(Serialize)]
struct ShareResult {
    id: String,
    link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    invitation: Option<String>,
}

pub async fn handle(ctx: &CliContext, args: ShareArgs) -> anyhow::Result<()> {
    let link = ctx.app.share_link(&args.id)?;
    let invitation = match args.invite {
        Some(email) => Some(ctx.app.invite(&args.id, &email)?),
        None => None,
    };
    output::output_success(ShareResult {
        id: args.id,
        link,
        invitation,
    });
    Ok(())
}
