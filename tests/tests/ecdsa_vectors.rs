// Deterministic ECDSA against published RFC 6979 secp256k1 vectors
use k1crypt::prelude::*;
use k1crypt::sign::ecdsa;
use k1crypt_tests::vectors::ECDSA_RFC6979;
use k1crypt_tests::{bytes32, unhex};

#[test]
fn test_rfc6979_vectors_through_private_key() -> Result<()> {
    for v in ECDSA_RFC6979 {
        let key = PrivateKey::from_hex(v.secret)?;
        assert_eq!(hex::encode(key.public_key().to_compressed()), v.public);

        let der = key.sign(v.message.as_bytes(), &Hasher::Sha256)?;
        let sig = EcdsaSignature::from_der(&der)?;
        assert_eq!(hex::encode(sig.r()), v.r, "r for {:?}", v.message);
        assert_eq!(hex::encode(sig.s()), v.s, "s for {:?}", v.message);
        assert!(sig.is_low_s());

        assert!(key.public_key().verify(&der, v.message.as_bytes(), &Hasher::Sha256)?);
    }
    Ok(())
}

#[test]
fn test_rfc6979_vectors_recover_signer() -> Result<()> {
    for v in ECDSA_RFC6979 {
        let key = PrivateKey::from_hex(v.secret)?;
        let recoverable = key.sign_recoverable(v.message.as_bytes(), &Hasher::Sha256)?;
        assert_eq!(hex::encode(&recoverable[..32]), v.r);
        assert_eq!(hex::encode(&recoverable[32..64]), v.s);

        let signer =
            PublicKey::from_signature_and_message(&recoverable, v.message.as_bytes(), &Hasher::Sha256)?;
        assert_eq!(&signer, key.public_key());
    }
    Ok(())
}

#[test]
fn test_prehashed_matches_sha256() -> Result<()> {
    let v = &ECDSA_RFC6979[3];
    let key = PrivateKey::from_hex(v.secret)?;
    let digest = k1crypt::algorithms::sha256(v.message.as_bytes());

    let prehashed = key.sign(&digest, &Hasher::Prehashed)?;
    let hashed = key.sign(v.message.as_bytes(), &Hasher::Sha256)?;
    assert_eq!(prehashed, hashed);
    Ok(())
}

#[test]
fn test_free_function_verify_with_serialized_key() -> Result<()> {
    let ctx = Context::global();
    for v in ECDSA_RFC6979 {
        let mut compact = [0u8; 64];
        compact[..32].copy_from_slice(&bytes32(v.r));
        compact[32..].copy_from_slice(&bytes32(v.s));
        let der = ecdsa::deserialize_compact(&compact)?.to_der();

        let ok = k1crypt::keys::verify_signature(
            &der,
            v.message.as_bytes(),
            &unhex(v.public),
            &Hasher::Sha256,
            &ctx,
        )?;
        assert!(ok);

        let wrong = k1crypt::keys::verify_signature(
            &der,
            b"a different message",
            &unhex(v.public),
            &Hasher::Sha256,
            &ctx,
        )?;
        assert!(!wrong);
    }
    Ok(())
}

#[test]
fn test_high_s_form_needs_normalizing() -> Result<()> {
    let v = &ECDSA_RFC6979[0];
    let key = PrivateKey::from_hex(v.secret)?;
    let der = key.sign(v.message.as_bytes(), &Hasher::Sha256)?;
    let (_, low) = EcdsaSignature::from_der(&der)?.normalize();

    // Flip s to n - s by hand
    let ctx = Context::global();
    let s = k1crypt::algorithms::Scalar::from_bytes(low.s())?;
    let high = EcdsaSignature::from_components(*low.r(), s.negate().to_bytes());
    assert!(!high.is_low_s());
    assert!(!key.public_key().verify(&high.to_der(), v.message.as_bytes(), &Hasher::Sha256)?);

    let (changed, normalized) = ecdsa::signature_normalize(&high.to_der())?;
    assert!(changed);
    assert_eq!(normalized, der);
    assert!(ecdsa::verify(
        &ctx,
        &EcdsaSignature::from_der(&normalized)?,
        &k1crypt::algorithms::sha256(v.message.as_bytes()),
        key.public_key().as_point(),
    ));
    Ok(())
}

#[test]
fn test_trait_surface_matches_key_api() -> Result<()> {
    use k1crypt::sign::ecdsa::{EcdsaSecp256k1PublicKey, EcdsaSecp256k1SecretKey};

    let v = &ECDSA_RFC6979[1];
    let secret = EcdsaSecp256k1SecretKey::from_bytes(&bytes32(v.secret))?;
    let sig = EcdsaSecp256k1::sign(v.message.as_bytes(), &secret)?;
    assert_eq!(hex::encode(sig.r()), v.r);

    let mut public = [0u8; 33];
    public.copy_from_slice(&unhex(v.public));
    assert!(EcdsaSecp256k1::verify(
        v.message.as_bytes(),
        &sig,
        &EcdsaSecp256k1PublicKey(public)
    )?);
    Ok(())
}
