use anyhow::Result;
use depgraph::commands::generate;
use depgraph::config::GraphConfig;

fn main() -> Result<()> {
    env_logger::init();

    let project_root = std::env::current_dir()?;
    let config = GraphConfig::discover(project_root);
    generate::generate_graphs(&config)
}
