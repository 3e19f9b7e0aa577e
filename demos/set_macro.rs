use denseset::{bitset, BitSet};

fn main() {
    let mut set: BitSet<u32> = bitset![4, 32, 16, 24, 63];
    assert!(set.contains(32));
    assert!(set.contains(63));

    set.insert(25);
    set.remove(4);

    println!("Set contents: {set}");
    println!("Cardinality: {}", set.len());
}
