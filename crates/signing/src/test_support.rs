#[cfg(test)]
pub mod tests {
    use crate::request_signing::{PrivateKey, PublicKey, RequestSigner, SignatureVerifier};

    pub const PRIVATE_KEY_PEM: &str = include_str!("../tests/fixtures/private_key.pem");
    pub const PUBLIC_KEY_PEM: &str = include_str!("../tests/fixtures/public_key.pem");

    pub const UNRELATED_PRIVATE_KEY_PEM: &str =
        include_str!("../tests/fixtures/unrelated_private_key.pem");
    pub const UNRELATED_PUBLIC_KEY_PEM: &str =
        include_str!("../tests/fixtures/unrelated_public_key.pem");

    pub const PKCS1_PRIVATE_KEY_PEM: &str = include_str!("../tests/fixtures/pkcs1_private_key.pem");
    pub const RSA1024_PRIVATE_KEY_PEM: &str =
        include_str!("../tests/fixtures/rsa1024_private_key.pem");
    pub const RSA1024_PUBLIC_KEY_PEM: &str =
        include_str!("../tests/fixtures/rsa1024_public_key.pem");
    pub const RSA2047_PRIVATE_KEY_PEM: &str =
        include_str!("../tests/fixtures/rsa2047_private_key.pem");
    pub const RSA2047_PUBLIC_KEY_PEM: &str =
        include_str!("../tests/fixtures/rsa2047_public_key.pem");
    pub const EC_PRIVATE_KEY_PEM: &str = include_str!("../tests/fixtures/ec_private_key.pem");
    pub const EC_PUBLIC_KEY_PEM: &str = include_str!("../tests/fixtures/ec_public_key.pem");

    pub const NOTIFY_PATH: &str = "/gopay/v1.0/debit/notify";
    pub const NOTIFY_TIMESTAMP: &str = "2024-04-22T09:55:40+07:00";

    /// Signature of the `POST` notify request with body `{}` under
    /// [`PRIVATE_KEY_PEM`]. PKCS#1 v1.5 is deterministic, so this is exact.
    pub const NOTIFY_SIGNATURE: &str = "ggP7902LSQaN6FPaQokW10i8yzfGrF219YVDS9I/zLbTuy3LG/ZmY4oEN2Sl+54e8tUhXgu0XnTkbohBFon4/n5UJFQlRNGPGU95oAQInVvdayR+J0ZhSBI8i+X6EEpl7JyziiM/NFrvOELF+rat2t0VeoKZuaaGqdKuJpUpYjRzxYMxCnOxq2XUu9yVyod6dM2d8XMK//9/8Iv1UnegB4MZGlOrICuxTWiwyjvFzZV95iv40bFejqF/6JFefBzujnfJ1Px9HMMCEVC8yt8VCGLT56JVd7Rrc/ezZx56BatYvx0qwsmeZx+VcXfl+6oje/xdlsNNr2m2a4+Zl7SS5Q==";

    pub fn test_private_key() -> PrivateKey {
        PrivateKey::from_pem(PRIVATE_KEY_PEM).expect("Invalid test private key")
    }

    pub fn test_public_key() -> PublicKey {
        PublicKey::from_pem(PUBLIC_KEY_PEM).expect("Invalid test public key")
    }

    pub fn test_signer() -> RequestSigner {
        RequestSigner::new(test_private_key())
    }

    pub fn test_verifier() -> SignatureVerifier {
        SignatureVerifier::new(test_public_key())
    }
}
