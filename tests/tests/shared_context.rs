// One context shared by many threads while it is being reseeded
use std::sync::Arc;
use std::thread;

use k1crypt::algorithms::Scalar;
use k1crypt::prelude::*;
use k1crypt::sign::ecdsa;

#[test]
fn test_reseeding_does_not_change_results() -> Result<()> {
    let ctx = Arc::new(Context::with_name("reseeded", Some(&b"first seed"[..])));
    let key = PrivateKey::from_u128(0xfeed)?.with_context(Arc::clone(&ctx));
    let before = key.sign(b"message", &Hasher::Sha256)?;

    ctx.reseed(Some(&b"second seed"[..]));
    assert_eq!(key.sign(b"message", &Hasher::Sha256)?, before);

    ctx.reseed(None);
    assert_eq!(key.sign(b"message", &Hasher::Sha256)?, before);
    assert_eq!(ctx.name(), Some("reseeded"));
    Ok(())
}

#[test]
fn test_concurrent_signing_and_reseeding() {
    let ctx = Arc::new(Context::new(None));
    let digest = k1crypt::algorithms::sha256(b"shared context");

    let reseeder = {
        let ctx = Arc::clone(&ctx);
        thread::spawn(move || {
            for i in 0u32..50 {
                ctx.reseed(Some(&i.to_be_bytes()[..]));
            }
        })
    };

    let signers: Vec<_> = (1u64..=4)
        .map(|i| {
            let ctx = Arc::clone(&ctx);
            thread::spawn(move || {
                let secret = Scalar::from_u64(1000 + i);
                let public = ctx.mul_generator(&secret);
                for _ in 0..10 {
                    let sig = ecdsa::sign(&ctx, &secret, &digest, &Rfc6979::new()).unwrap();
                    assert!(ecdsa::verify(&ctx, &sig, &digest, &public));
                    assert_eq!(ecdsa::recover(
                        &ctx,
                        &ecdsa::sign_recoverable(&ctx, &secret, &digest, &Rfc6979::new()).unwrap(),
                        &digest
                    )
                    .unwrap()
                    .serialize_compressed(), public.serialize_compressed());
                }
            })
        })
        .collect();

    reseeder.join().unwrap();
    for signer in signers {
        signer.join().unwrap();
    }
}

#[test]
fn test_global_context_is_shared() -> Result<()> {
    let a = Context::global();
    let b = Context::global();
    assert!(Arc::ptr_eq(&a, &b));

    let key = PrivateKey::from_u128(7)?;
    assert!(Arc::ptr_eq(key.public_key().context(), &a));
    Ok(())
}

#[test]
fn test_keys_on_separate_contexts_compare_equal() -> Result<()> {
    let local = Arc::new(Context::new(Some(&b"local"[..])));
    let global_key = PrivateKey::from_u128(99)?;
    let local_key = PrivateKey::from_u128(99)?.with_context(local);
    assert_eq!(global_key.public_key(), local_key.public_key());
    assert_eq!(
        global_key.sign(b"m", &Hasher::Sha256)?,
        local_key.sign(b"m", &Hasher::Sha256)?
    );
    Ok(())
}
