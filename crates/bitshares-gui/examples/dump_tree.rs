//! Prints the mode tree the way a tree view would see it.
//!
//! Loads a layout file if one is given, otherwise uses the sample tree.
//!
//! Run with: cargo run -p bitshares-gui --example dump_tree [layout.toml]
//! Set `RUST_LOG=bitshares_gui::model=trace` to watch index resolution.

use bitshares_gui::logging::{TreeDebug, TreeFormatOptions, TreeStyle};
use bitshares_gui::{ModeTree, ModeTreeModel, TreeLayout};
use tracing_subscriber::EnvFilter;

fn main() -> bitshares_gui::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let tree = match std::env::args().nth(1) {
        Some(path) => ModeTree::new(&TreeLayout::load(path)?)?,
        None => ModeTree::sample(),
    };
    let model = ModeTreeModel::new(tree);

    print!("{}", TreeDebug::new().format(&model));

    let compact = TreeDebug::with_options(TreeFormatOptions {
        style: TreeStyle::Compact,
        ..Default::default()
    });
    println!();
    println!("{}", compact.format(&model));

    Ok(())
}
