#[cfg(feature = "RingCryptoProvider")]
use crate::crypto::provider::RingCryptoProvider;
#[cfg(feature = "RustCryptoProvider")]
use crate::crypto::provider::RustCryptoProvider;
use crate::crypto::{algorithm::Algorithm, provider::*, *};
use crate::utilities::error::*;

const PLAINTEXT: &[u8] = b"38a6b327573639d654b5b729336cf74d01728cf4fa9af81a0ef1814ffc1d492f";

fn test_primitives_with_crypto_provider(crypto_provider: &impl CryptoProvider) -> Result<()> {
    for algorithm in crypto_provider.supported() {
        match algorithm {
            Algorithm::MessageDigest(scheme) => {
                let hash = crypto_provider.hash(scheme)?;
                assert_eq!(hash.digest(PLAINTEXT)?.len(), scheme.size());
            }
            Algorithm::Mac(scheme) => {
                let hash = crypto_provider.hash(scheme)?;
                let tag = hash.mac(b"key", PLAINTEXT)?;
                assert_eq!(tag, hash.mac(b"key", PLAINTEXT)?);
                assert_ne!(tag, hash.mac(b"other key", PLAINTEXT)?);
            }
            Algorithm::Cipher(scheme) => {
                let aead = crypto_provider.aead(scheme)?;
                let key = vec![7u8; aead.key_size()];
                let nonce = vec![1u8; aead.nonce_size()];
                let ciphertext = aead.seal(&key, &nonce, PLAINTEXT, b"aad")?;
                assert_eq!(ciphertext.len(), PLAINTEXT.len() + scheme.tag_size());
                assert_eq!(aead.open(&key, &nonce, &ciphertext, b"aad")?, PLAINTEXT);
                assert!(aead.open(&key, &nonce, &ciphertext, b"bad").is_err());
                assert!(aead.seal(&key[1..], &nonce, PLAINTEXT, b"aad").is_err());
            }
            Algorithm::Signature(scheme) | Algorithm::KeyPairGenerator(scheme) => {
                let signature = crypto_provider.signature(scheme)?;
                let key_pair = signature.generate_key_pair()?;
                assert_eq!(key_pair.signature_scheme(), scheme);
                let out = signature.sign(key_pair.private_key(), PLAINTEXT)?;
                assert!(signature
                    .verify(key_pair.public_key(), PLAINTEXT, &out)
                    .is_ok());
                assert!(signature
                    .verify(key_pair.public_key(), b"tampered", &out)
                    .is_err());
            }
            Algorithm::Kdf(scheme) => {
                let kdf = crypto_provider.kdf(scheme)?;
                let prk = kdf.extract(PLAINTEXT, b"salt")?;
                assert_eq!(prk.len(), kdf.extract_size());
                let okm = kdf.expand(&prk, b"info", 42)?;
                assert_eq!(okm.len(), 42);
                assert_eq!(okm, kdf.expand(&prk, b"info", 42)?);
            }
            Algorithm::SecureRandom(scheme) => {
                let rand = crypto_provider.rand(scheme)?;
                let (mut a, mut b) = ([0u8; 32], [0u8; 32]);
                rand.fill(&mut a)?;
                rand.fill(&mut b)?;
                assert_ne!(a, b);
            }
            Algorithm::Kem(scheme) => {
                let kem = crypto_provider.kem(scheme)?;
                let key_pair = kem.generate_key_pair()?;
                let (enc, secret) = kem.encapsulate(key_pair.public_key(), b"info")?;
                let recovered = kem.decapsulate(key_pair.private_key(), &enc, b"info")?;
                assert_eq!(secret, recovered);
            }
        }
    }

    Ok(())
}

#[test]
fn test_primitives() -> Result<()> {
    #[cfg(feature = "RingCryptoProvider")]
    test_primitives_with_crypto_provider(&RingCryptoProvider::default())?;
    #[cfg(feature = "RustCryptoProvider")]
    test_primitives_with_crypto_provider(&RustCryptoProvider::default())?;

    Ok(())
}

fn test_get_instance_with_crypto_provider(crypto_provider: &impl CryptoProvider) -> Result<()> {
    assert_eq!(
        crypto_provider.get_instance("MessageDigest", "SHA512")?,
        Algorithm::MessageDigest(HashScheme::SHA512)
    );
    assert!(matches!(
        crypto_provider.get_instance("MessageDigest", "MD2"),
        Err(Error::NoSuchAlgorithm(_))
    ));
    assert!(matches!(
        crypto_provider.get_instance("Signature", "Ed448"),
        Err(Error::UnsupportedAlgorithm(_, _))
    ));

    Ok(())
}

#[test]
fn test_get_instance() -> Result<()> {
    #[cfg(feature = "RingCryptoProvider")]
    test_get_instance_with_crypto_provider(&RingCryptoProvider::default())?;
    #[cfg(feature = "RustCryptoProvider")]
    test_get_instance_with_crypto_provider(&RustCryptoProvider::default())?;

    Ok(())
}

// RFC 5869 A.1, HKDF-SHA256 basic test case
fn test_kdf_known_answer_with_crypto_provider(crypto_provider: &impl CryptoProvider) -> Result<()> {
    let ikm = [0x0bu8; 22];
    let salt = hex::decode("000102030405060708090a0b0c").expect("valid hex");
    let info = hex::decode("f0f1f2f3f4f5f6f7f8f9").expect("valid hex");

    let kdf = crypto_provider.kdf(HashScheme::SHA256)?;
    let prk = kdf.extract(&ikm, &salt)?;
    assert_eq!(
        hex::encode(&prk),
        "077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5"
    );
    let okm = kdf.expand(&prk, &info, 42)?;
    assert_eq!(
        hex::encode(&okm),
        "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf34007208d5b887185865"
    );

    Ok(())
}

#[test]
fn test_kdf_known_answer() -> Result<()> {
    #[cfg(feature = "RingCryptoProvider")]
    test_kdf_known_answer_with_crypto_provider(&RingCryptoProvider::default())?;
    #[cfg(feature = "RustCryptoProvider")]
    test_kdf_known_answer_with_crypto_provider(&RustCryptoProvider::default())?;

    Ok(())
}

#[cfg(feature = "RustCryptoProvider")]
#[test]
fn test_services_and_attributes() {
    let crypto_provider = RustCryptoProvider::default();
    let services = services_of(&crypto_provider);
    assert_eq!(services.len(), crypto_provider.supported().len());
    assert!(services
        .iter()
        .all(|service| service.provider() == crypto_provider.name()));

    let attributes = attributes_of(&crypto_provider);
    assert_eq!(
        attributes[0],
        ("Provider.id name".to_string(), "RustCrypto".to_string())
    );
    assert!(attributes.contains(&(
        "Alg.Alias.MessageDigest.SHA256".to_string(),
        "SHA-256".to_string()
    )));
    assert!(attributes.contains(&("KEM.DHKEM-X25519-HKDF-SHA256".to_string(), "RustCrypto".to_string())));
}
