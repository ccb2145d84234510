use redis_slot::{crc16, SlotSpace};

fn main() {
    let keys: [&[u8]; 4] = [b"foo", b"{user1000}.following", b"{user1000}.followers", b"{}"];

    let space = SlotSpace::default();
    for key in keys {
        let located = space.locate(key);
        println!("{located:?}");
    }

    // Same checksum the C entry point returns
    let crc = crc16(b"123456789");
    assert_eq!(crc, 0x31C3);
    println!("crc16(123456789) = {crc:#06x}");
}
