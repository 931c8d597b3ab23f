use bstree::{Tree, TreeError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bstree")]
#[command(about = "Builds a binary search tree and reports on its shape")]
struct Args {
    /// Elements to insert, in order.
    #[arg(default_values_t = [10, 5, 15, 2, 8], allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Element to look up once the tree is built.
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    probe: i64,

    /// Elements to remove after the report, one at a time.
    #[arg(long = "remove", value_name = "VALUE", allow_negative_numbers = true)]
    removals: Vec<i64>,
}

/// Formats an extreme element, or `<empty>` when the tree doesn't have one.
fn describe(extreme: Result<&i64, TreeError>) -> String {
    match extreme {
        Ok(x) => x.to_string(),
        Err(TreeError::Empty) => "<empty>".to_string(),
    }
}

fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Logging is already configured");
    }

    let args = Args::parse();
    let mut tree: Tree<i64> = args.values.iter().copied().collect();
    tracing::debug!(requested = args.values.len(), len = tree.len(), "built tree");

    println!("Inorder: {:?}", tree.inorder_traversal());
    println!("Preorder: {:?}", tree.preorder_traversal());
    println!("Postorder: {:?}", tree.postorder_traversal());
    println!("Min: {}", describe(tree.min()));
    println!("Max: {}", describe(tree.max()));
    println!("Height: {}", tree.height());
    println!("Size: {}", tree.len());
    println!("Contains {}: {}", args.probe, tree.contains(&args.probe));
    println!("Is Valid BST: {}", tree.is_valid_bst());

    for value in &args.removals {
        let removed = tree.remove(value);
        println!("Remove {value}: {removed}");
        println!("Inorder: {:?}", tree.inorder_traversal());
    }
}
