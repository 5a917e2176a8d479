use crate::cli::{AddArgs, ListArgs};
use crate::context::CliContext;
use crate::output;
use logoshare_domain::{resolve_image_url, ImageContext, LogoDraft, NavCategory};

pub async fn handle_list(ctx: &mut CliContext, args: ListArgs) -> anyhow::Result<()> {
    let library = ctx.app.library_mut();
    library.set_category(args.category);
    library.set_search(args.search.clone().unwrap_or_default());
    library.set_view_mode(args.view);

    let logos = library.displayed();
    tracing::debug!(
        "Listing {} logos for {} (search: {:?})",
        logos.len(),
        args.category,
        args.search
    );
    output::output_listing(&logos, args.category, args.view, args.search);
    Ok(())
}

pub async fn handle_get(ctx: &CliContext, id: &str) -> anyhow::Result<()> {
    let mut logo = ctx.app.library().get(id)?.clone();
    logo.image_url = resolve_image_url(&logo.image_url, ImageContext::Preview).to_string();
    output::output_success(&logo);
    Ok(())
}

pub async fn handle_add(ctx: &mut CliContext, args: AddArgs) -> anyhow::Result<()> {
    let draft = build_draft(&args)?;
    let logo = ctx.app.add_logo(&draft, args.status).await?;
    ctx.save().await?;
    output::output_success(&logo);
    Ok(())
}

pub fn handle_categories() {
    let names: Vec<&str> = NavCategory::ALL.iter().map(|c| c.as_str()).collect();
    output::output_success(names);
}

fn split_pair<'a>(value: &'a str, what: &str) -> anyhow::Result<(&'a str, &'a str)> {
    value
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Invalid {} '{}': expected NAME=VALUE", what, value))
}

fn build_draft(args: &AddArgs) -> anyhow::Result<LogoDraft> {
    let mut draft = LogoDraft::new().with_name(&args.name);
    draft.description = args.description.clone().unwrap_or_default();
    draft.client_name = args.client.clone().unwrap_or_default();
    draft.category_name = args.category.clone().unwrap_or_default();
    draft.designer = args.designer.clone().unwrap_or_default();
    draft.studio = args.studio.clone().unwrap_or_default();
    draft.licences_details = args.licences.clone().unwrap_or_default();

    for color in &args.colors {
        let (name, hex) = split_pair(color, "color")?;
        draft.add_color(name, hex)?;
    }
    for font in &args.fonts {
        draft.add_font(font)?;
    }
    for link in &args.links {
        let (name, url) = split_pair(link, "link")?;
        draft.add_external_link(name, url)?;
    }
    Ok(draft)
}
