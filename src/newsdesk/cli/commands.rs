use super::print::{print_articles, print_messages};
use super::setup::PublishArgs;
use super::AppContext;
use colored::*;
use newsdesk::api::ConfigAction;
use newsdesk::error::{NewsdeskError, Result};
use newsdesk::image::ImageData;
use newsdesk::model::ArticleDraft;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn handle_publish(ctx: &mut AppContext, args: PublishArgs) -> Result<()> {
    let body = match &args.body_file {
        Some(path) => read_body(path)?,
        None => args.body.clone().unwrap_or_default(),
    };
    let image = args.image.as_deref().map(ImageData::from_file).transpose()?;

    let draft = ArticleDraft::new(&args.headline, &args.reporter, args.category, body)
        .with_caption(&args.caption)
        .with_image(image);

    let result = ctx.api.publish(draft)?;
    print_messages(&result.messages);
    for article in &result.affected_articles {
        println!("{}", format!("id {}", article.id).dimmed());
    }
    Ok(())
}

fn read_body(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return io::read_to_string(io::stdin()).map_err(NewsdeskError::Io);
    }
    fs::read_to_string(path).map_err(NewsdeskError::Io)
}

pub fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_articles()?;
    print_articles(&result.listed_articles);
    print_messages(&result.messages);
    Ok(())
}

pub fn handle_show(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.open_article(id)?;
    if let Some(html) = &result.fragment {
        println!("{}", html);
    }
    Ok(())
}

pub fn handle_home(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.homepage()?;
    if let Some(home) = &result.homepage {
        if let Some(ticker) = &home.ticker_html {
            println!("<div class=\"breaking-ticker\">{}</div>", ticker);
        }
        println!("{}", home.hero_html);
        if !home.grid_html.is_empty() {
            println!("{}", home.grid_html);
        }
    }
    Ok(())
}

pub fn handle_build(ctx: &mut AppContext, out: PathBuf) -> Result<()> {
    let result = ctx.api.build_site()?;
    for page in &result.pages {
        let target = out.join(&page.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(NewsdeskError::Io)?;
        }
        fs::write(&target, &page.contents).map_err(NewsdeskError::Io)?;
        tracing::debug!(path = %target.display(), "wrote page");
    }
    print_messages(&result.messages);
    println!(
        "{}",
        format!("Wrote {} files to {}", result.pages.len(), out.display()).green()
    );
    Ok(())
}

pub fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    Ok(())
}
