//! C entry points for hosts that load the library dynamically (LuaJIT FFI and the like)
//!
//! ```c
//! int lua_redis_crc16(char *key, int keylen);
//! int lua_redis_slot(char *key, int keylen);
//! ```
//!
//! Both return `-1` for a null `key` or a negative `keylen`.
use std::ffi::{c_char, c_int};
use std::slice;

use crate::{crc16, hash_slot};

/// Borrows the caller's buffer, `None` on a detectable contract violation
///
/// # Safety
///
/// When `key` is non-null it must point to `keylen` readable bytes that stay alive for `'a`.
unsafe fn key_bytes<'a>(key: *const c_char, keylen: c_int) -> Option<&'a [u8]> {
    if keylen < 0 {
        log::warn!("rejected negative key length {}", keylen);
        return None;
    }
    if keylen == 0 {
        return Some(&[]);
    }
    if key.is_null() {
        log::warn!("rejected null key pointer");
        return None;
    }
    Some(slice::from_raw_parts(key.cast::<u8>(), keylen as usize))
}

/// CRC16 of `keylen` bytes at `key`, in `0..=65535`
///
/// # Safety
///
/// `key` must point to at least `keylen` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn lua_redis_crc16(key: *const c_char, keylen: c_int) -> c_int {
    match key_bytes(key, keylen) {
        Some(bytes) => {
            let crc = crc16(bytes);
            log::trace!("lua_redis_crc16 len {} -> {:#06x}", keylen, crc);
            crc as c_int
        }
        None => -1,
    }
}

/// Hash slot of `keylen` bytes at `key`, in `0..16384`
///
/// # Safety
///
/// `key` must point to at least `keylen` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn lua_redis_slot(key: *const c_char, keylen: c_int) -> c_int {
    match key_bytes(key, keylen) {
        Some(bytes) => {
            let slot = hash_slot(bytes);
            log::trace!("lua_redis_slot len {} -> {}", keylen, slot);
            slot as c_int
        }
        None => -1,
    }
}
