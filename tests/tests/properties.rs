// Randomized cross-crate properties
use k1crypt::prelude::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn key_from_seed(seed: u64) -> PrivateKey {
    PrivateKey::generate_with_rng(&mut ChaCha20Rng::seed_from_u64(seed))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn ecdsa_signatures_verify_and_recover(seed in any::<u64>(), message in prop::collection::vec(any::<u8>(), 0..200)) {
        let key = key_from_seed(seed);
        let der = key.sign(&message, &Hasher::Sha256).unwrap();
        prop_assert!(key.public_key().verify(&der, &message, &Hasher::Sha256).unwrap());

        let recoverable = key.sign_recoverable(&message, &Hasher::Sha256).unwrap();
        let signer = PublicKey::from_signature_and_message(&recoverable, &message, &Hasher::Sha256).unwrap();
        prop_assert_eq!(&signer, key.public_key());
        prop_assert_eq!(&EcdsaSignature::from_der(&der).unwrap().to_compact()[..], &recoverable[..64]);
    }

    #[test]
    fn schnorr_signatures_verify(seed in any::<u64>(), message in any::<[u8; 32]>(), aux in any::<[u8; 32]>()) {
        let key = key_from_seed(seed);
        let sig = key.sign_schnorr(&message, &AuxRandomness::Bytes(aux)).unwrap();
        prop_assert!(key.public_key_xonly().verify(&sig, &message).unwrap());

        let other = key_from_seed(seed.wrapping_add(1));
        prop_assert!(!other.public_key_xonly().verify(&sig, &message).unwrap());
    }

    #[test]
    fn ecdh_agrees(a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a != b);
        let alice = key_from_seed(a);
        let bob = key_from_seed(b);
        let ab = alice.ecdh(&bob.public_key().to_compressed()).unwrap();
        let ba = bob.ecdh(&alice.public_key().to_compressed()).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn pkcs8_roundtrip(seed in any::<u64>()) {
        let key = key_from_seed(seed);
        prop_assert_eq!(PrivateKey::from_der(&key.to_der()).unwrap(), key.clone());
        prop_assert_eq!(PrivateKey::from_pem(&key.to_pem()).unwrap(), key);
    }
}
