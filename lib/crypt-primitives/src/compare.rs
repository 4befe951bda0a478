///
/// crypt::compare - Constant-time comparison
///
/// `hash_equals(known, user) -> bool`
///
/// Running time depends only on `known.len()`. It does not depend on where
/// the inputs first differ, nor on how long `user` is. Every byte of
/// `known` is visited exactly once against some byte of `user`, and the
/// length check is folded into the same `Choice` instead of returning early.
///

use subtle::{Choice, ConstantTimeEq};

static ZERO: [u8; 1] = [0];

pub fn hash_equals(known: &[u8], user: &[u8]) -> bool {
    let same_len = (known.len() as u64).ct_eq(&(user.len() as u64));

    // An empty `user` is compared against a single zero byte so the loop
    // below still touches memory once per byte of `known`.
    let user = if user.is_empty() { &ZERO[..] } else { user };

    let mut same_bytes = Choice::from(1u8);
    for (i, k) in known.iter().enumerate() {
        same_bytes &= k.ct_eq(&user[i % user.len()]);
    }

    (same_len & same_bytes).into()
}
