use super::*;
use crate::config::Settings;
use crate::runner::AlgorithmTest;

const AAD: &[u8] = b"cryptotest aad";

pub struct CipherTests {
    print_results: bool,
}

impl CipherTests {
    pub fn create(settings: &Settings) -> Box<dyn AlgorithmTest> {
        Box::new(Self {
            print_results: settings.verbosity.print_results,
        })
    }
}

impl AlgorithmTest for CipherTests {
    fn tested_part(&self) -> &str {
        "Cipher"
    }

    fn check_algorithm(&self, unit: &TestUnit) -> std::result::Result<(), Failure> {
        let (crypto, algorithm) = get_instance(unit)?;
        let Algorithm::Cipher(scheme) = algorithm else {
            return Err(unexpected(unit, algorithm));
        };
        let aead = crypto.aead(scheme).map_err(init_failure)?;

        let key = vec![0x42; aead.key_size()];
        let nonce = vec![0x24; aead.nonce_size()];
        let ciphertext = aead.seal(&key, &nonce, MESSAGE, AAD).map_err(run_failure)?;
        print_result(self.print_results, unit, &ciphertext);

        let plaintext = aead
            .open(&key, &nonce, &ciphertext, AAD)
            .map_err(run_failure)?;
        if plaintext != MESSAGE {
            return Err(Failure::run("decrypted text differs from the original"));
        }

        let mut tampered = ciphertext.to_vec();
        tampered[0] ^= 0x01;
        if aead.open(&key, &nonce, &tampered, AAD).is_ok() {
            return Err(Failure::run("tampered ciphertext was accepted"));
        }
        Ok(())
    }
}
