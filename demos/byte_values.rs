use std::env;

use denseset::BitSet;

fn main() {
    let mut args = env::args();
    args.next();
    let s = args
        .next()
        .expect("Pass a string to report the byte values of");

    let mut seen: BitSet<u8> = BitSet::new();
    for byte in s.bytes() {
        seen.insert(byte);
    }

    println!("The string '{s}' uses {} distinct byte values:", seen.len());
    for byte in seen.iter() {
        if byte.is_ascii_graphic() {
            println!("  {byte} ('{}')", byte as char);
        } else {
            println!("  {byte}");
        }
    }
}
