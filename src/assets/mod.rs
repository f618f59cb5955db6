//! Raw asset payload handling: image decoding into the crate's
//! premultiplied-RGBA8 working form.

pub mod decode;
