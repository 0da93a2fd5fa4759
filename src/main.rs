use std::path::PathBuf;
use std::sync::Arc;

use serde_json::json;

use opencode_allowlist::core::{AuthorizationDecision, PluginContext, EXTERNAL_DIRECTORY_KIND};
use opencode_allowlist::logging;
use opencode_allowlist::tools::{ListAllowedDirectoriesTool, Tool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging()?;

    let cwd = std::env::current_dir()?;
    // Walk all the way up when run standalone; a hosting runtime would pass
    // its worktree root here instead.
    let root = cwd
        .ancestors()
        .last()
        .map(PathBuf::from)
        .unwrap_or_else(|| cwd.clone());

    tracing::info!("Loading allowlist from {}", cwd.display());

    let ctx = Arc::new(PluginContext::new(cwd, root));
    let paths: Vec<String> = std::env::args().skip(1).collect();

    if paths.is_empty() {
        let tool = ListAllowedDirectoriesTool::new(ctx);
        let result = tool.execute(&json!({})).await?;
        println!("{}", result.output);
        return Ok(());
    }

    for path in &paths {
        let decision = ctx.authorize(EXTERNAL_DIRECTORY_KIND, Some(path)).await;
        match decision {
            AuthorizationDecision::Allow => println!("allow  {}", path),
            AuthorizationDecision::Defer => println!("defer  {}", path),
        }
    }

    Ok(())
}
