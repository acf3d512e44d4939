// BIP340 Schnorr signatures and BIP86 taproot output keys
use k1crypt::prelude::*;
use k1crypt::sign::schnorr::{SchnorrPublicKey, SchnorrSecretKey, SchnorrSignature};
use k1crypt_tests::vectors::{BIP340, BIP86_INTERNAL_KEY, BIP86_OUTPUT_KEY};
use k1crypt_tests::{bytes32, unhex};

#[test]
fn test_bip340_vectors_through_private_key() -> Result<()> {
    let signable = BIP340.iter().filter(|v| !v.secret.is_empty() && v.message.len() == 64);
    for v in signable {
        let key = PrivateKey::from_hex(v.secret)?;
        let xonly = key.public_key_xonly();
        assert_eq!(xonly.format(), bytes32(v.public), "public key of vector {}", v.index);

        let aux = AuxRandomness::Bytes(bytes32(v.aux));
        let sig = key.sign_schnorr(&unhex(v.message), &aux)?;
        assert_eq!(sig.to_vec(), unhex(v.signature), "signature of vector {}", v.index);
        assert!(xonly.verify(&sig, &unhex(v.message))?);
    }
    Ok(())
}

#[test]
fn test_bip340_vectors_verify_from_parsed_keys() -> Result<()> {
    for v in BIP340 {
        let xonly = XOnlyPublicKey::from_bytes(&unhex(v.public))?;
        assert!(
            xonly.verify(&unhex(v.signature), &unhex(v.message))?,
            "vector {}",
            v.index
        );

        let mut extended = unhex(v.message);
        extended.push(0x00);
        assert!(!xonly.verify(&unhex(v.signature), &extended)?);
    }
    Ok(())
}

#[test]
fn test_bip340_variable_length_messages_verify() -> Result<()> {
    let variable: Vec<_> = BIP340.iter().filter(|v| v.message.len() != 64).collect();
    let lengths: Vec<usize> = variable.iter().map(|v| unhex(v.message).len()).collect();
    assert_eq!(lengths, vec![0, 1, 17, 100]);

    for v in variable {
        let key = PrivateKey::from_hex(v.secret)?;
        let xonly = key.public_key_xonly();
        assert_eq!(xonly.format(), bytes32(v.public), "public key of vector {}", v.index);
        assert!(xonly.verify(&unhex(v.signature), &unhex(v.message))?, "vector {}", v.index);

        // signing stays restricted to 32-byte messages
        let err = key
            .sign_schnorr(&unhex(v.message), &AuxRandomness::Bytes(bytes32(v.aux)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
    Ok(())
}

#[test]
fn test_bip340_vectors_through_trait() -> Result<()> {
    for v in BIP340 {
        let sig = SchnorrSignature::from_bytes(&unhex(v.signature))?;
        let public = SchnorrPublicKey(bytes32(v.public));
        assert!(SchnorrBip340::verify(&unhex(v.message), &sig, &public)?);
    }

    let v = &BIP340[0];
    let secret = SchnorrSecretKey::from_bytes(&bytes32(v.secret))?;
    let sig = SchnorrBip340::sign(&unhex(v.message), &secret)?;
    assert!(SchnorrBip340::verify(&unhex(v.message), &sig, &SchnorrPublicKey(bytes32(v.public)))?);
    Ok(())
}

#[test]
fn test_schnorr_rejects_wrong_message_length() -> Result<()> {
    let key = PrivateKey::from_hex(BIP340[1].secret)?;
    let err = key.sign_schnorr(b"not thirty-two bytes", &AuxRandomness::Zero).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    Ok(())
}

#[test]
fn test_fresh_aux_signatures_differ_but_verify() -> Result<()> {
    let key = PrivateKey::from_hex(BIP340[2].secret)?;
    let message = unhex(BIP340[2].message);
    let a = key.sign_schnorr(&message, &AuxRandomness::Fresh)?;
    let b = key.sign_schnorr(&message, &AuxRandomness::Fresh)?;
    assert_ne!(a, b);
    assert!(key.public_key_xonly().verify(&a, &message)?);
    assert!(key.public_key_xonly().verify(&b, &message)?);
    Ok(())
}

#[test]
fn test_bip86_output_key() -> Result<()> {
    let internal = XOnlyPublicKey::from_bytes(&unhex(BIP86_INTERNAL_KEY))?;
    let output = internal.tap_tweak(None)?;
    assert_eq!(hex::encode(output.format()), BIP86_OUTPUT_KEY);
    Ok(())
}

#[test]
fn test_tweaked_xonly_key_signs_with_tweaked_secret() -> Result<()> {
    // Key-path spend: the tweaked secret signs for the tweaked x-only key
    let key = PrivateKey::from_hex(BIP340[1].secret)?;
    let tweak = [0x42u8; 32];

    let tweaked_public = key.public_key_xonly().tweaked_add(&tweak)?;

    // Even-y secret first, then add the tweak
    let even = if key.public_key_xonly().parity() {
        let negated = k1crypt::algorithms::Scalar::from_bytes(key.secret())?.negate();
        PrivateKey::from_bytes(&negated.to_bytes())?
    } else {
        key.clone()
    };
    let tweaked_secret = even.tweaked_add(&tweak)?;
    assert_eq!(tweaked_secret.public_key_xonly(), tweaked_public);

    let message = [0x5au8; 32];
    let sig = tweaked_secret.sign_schnorr(&message, &AuxRandomness::Zero)?;
    assert!(tweaked_public.verify(&sig, &message)?);
    Ok(())
}
