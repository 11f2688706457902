/// Email-confirmation token: 16 random bytes, hex-encoded.
pub fn confirmation_token() -> String {
    let bytes: [u8; 16] = rand::random();
    hex::encode(bytes)
}

/// Replacement password for the new-password flow: 6 random bytes,
/// hex-encoded, which clears the 8-character minimum.
pub fn replacement_password() -> String {
    let bytes: [u8; 6] = rand::random();
    hex::encode(bytes)
}
