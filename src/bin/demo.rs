//! Builds a small tree and prints its in-order sequence and shape.

use ordered_tree::{Error, OrderedTree};

fn main() -> Result<(), Error> {
    let tree = OrderedTree::from_values(vec![10, 5, 15, 3, 7, 12, 18])?;

    println!("{}", tree);
    println!("inorder: {:?}", tree.inorder());
    println!("height: {}, nodes: {}, sum: {}", tree.height(), tree.len(), tree.sum());
    print!("{}", tree.render());

    Ok(())
}
