use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

/// Salted-hash credential. The plaintext password is dropped after
/// derivation; only the salt and the hex-encoded digest are kept.
#[derive(Debug, Clone)]
pub struct Credential {
    salt: [u8; SALT_LEN],
    digest: String,
}

impl Credential {
    pub fn derive(password: &str) -> Self {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let digest = hash_password(&salt, password);
        Self { salt, digest }
    }

    pub fn verify(&self, attempt: &str) -> bool {
        hash_password(&self.salt, attempt) == self.digest
    }
}

fn hash_password(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_matching_password() {
        let credential = Credential::derive("password1");
        assert!(credential.verify("password1"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let credential = Credential::derive("password1");
        assert!(!credential.verify("password2"));
        assert!(!credential.verify(""));
        // exact comparison, no trimming or case folding
        assert!(!credential.verify("Password1"));
        assert!(!credential.verify("password1 "));
    }

    #[test]
    fn derivations_are_salted() {
        let a = Credential::derive("password1");
        let b = Credential::derive("password1");
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.digest, b.digest);
        assert!(a.verify("password1"));
        assert!(b.verify("password1"));
    }
}
