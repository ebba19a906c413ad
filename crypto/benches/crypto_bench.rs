use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forum_crypto::{
    domain_separator, keypair_from_seed, proposal_struct_hash, sign_proposal, Ed25519Verifier,
    SignatureVerifier,
};
use forum_types::Address;

fn sign_proposal_bench(c: &mut Criterion) {
    let kp = keypair_from_seed(&[1u8; 32]);
    let domain = domain_separator("bench", 1, &Address::new([9; 32]));

    c.bench_function("sign_proposal", |b| {
        b.iter(|| sign_proposal(black_box(&domain), black_box(17), &kp))
    });
}

fn recover_bench(c: &mut Criterion) {
    let kp = keypair_from_seed(&[1u8; 32]);
    let domain = domain_separator("bench", 1, &Address::new([9; 32]));
    let sig = sign_proposal(&domain, 17, &kp);
    let struct_hash = proposal_struct_hash(17);

    c.bench_function("ed25519_recover", |b| {
        b.iter(|| Ed25519Verifier.recover(black_box(&domain), &struct_hash, &sig))
    });
}

fn blake2b_256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("blake2b_256_256B", |b| {
        b.iter(|| forum_crypto::blake2b_256(black_box(&data)))
    });
}

criterion_group!(benches, sign_proposal_bench, recover_bench, blake2b_256_bench);
criterion_main!(benches);
