use redis_slot::{hash_slot, Crc16Stream};

fn main() {
    // Checksum file.bin
    let file = std::fs::File::open("file.bin").unwrap();
    let mut stream = Crc16Stream::new(file);
    let crc = stream.read_checksum().unwrap();
    println!("crc16 = {crc:#06x}");

    // One key per line
    let keys = std::fs::read_to_string("keys.txt").unwrap_or_default();
    for key in keys.lines() {
        println!("{key} -> {}", hash_slot(key));
    }
}
