use dependencies::hex_literal::hex;
use dependencies::pretty_assertions::assert_eq;

use crate::element::START_INDEX;
use crate::error::ShachainError;
use crate::producer::RevocationProducer;

#[test]
fn test_producer_matches_bolt3_vectors() {
    // Commitment number 0 is shachain index 2^48-1, the "final node" vectors.
    let producer = RevocationProducer::new([0; 32]);
    assert_eq!(
        producer.at_index(0).unwrap(),
        hex!("02a40c85b6f28da08dfdbe0926c53fab2de6d28c10301f8f7c4073d5e42e3148"),
    );

    let producer = RevocationProducer::new([0x01; 32]);
    assert_eq!(
        producer.at_index(START_INDEX.0 - 1).unwrap(),
        hex!("915c75942a26bb3a433a8ce2cb0427c29ec6c1775cfc78328b57f6ba7bfeaa9c"),
    );
}

#[test]
fn test_producer_is_deterministic() {
    let first = RevocationProducer::new([0x42; 32]);
    let second = RevocationProducer::new([0x42; 32]);
    for commitment_number in 0..64 {
        assert_eq!(
            first.at_index(commitment_number).unwrap(),
            second.at_index(commitment_number).unwrap(),
        );
    }
    assert!(first.at_index(0).unwrap() != first.at_index(1).unwrap());
}

#[test]
fn test_producer_last_commitment_is_seed() {
    let producer = RevocationProducer::new([0x42; 32]);
    assert_eq!(producer.at_index(START_INDEX.0).unwrap(), [0x42; 32]);
    assert_eq!(
        producer.at_index(START_INDEX.0 + 1),
        Err(ShachainError::IndexOutOfRange(START_INDEX.0 + 1)),
    );
}
