use dependencies::hex_literal::hex;
use dependencies::pretty_assertions::assert_eq;

use crate::error::ShachainError;
use crate::producer::RevocationProducer;
use crate::store::RevocationStore;

struct TestInsert {
    secret: [u8; 32],
    successful: bool,
}

struct TestData<'a> {
    name: &'a str,
    inserts: &'a [TestInsert],
}

const fn ok(secret: [u8; 32]) -> TestInsert {
    TestInsert { secret, successful: true }
}

const fn fail(secret: [u8; 32]) -> TestInsert {
    TestInsert { secret, successful: false }
}

// INSERT_TESTS encodes the test vectors specified in BOLT-03, Appendix D,
// Storage Tests. Secrets are listed in insertion order, starting from
// commitment number 0.
const INSERT_TESTS: [TestData; 9] = [
    TestData {
        name: "insert_secret correct sequence",
        inserts: &[
            ok(hex!("7cc854b54e3e0dcdb010d7a3fee464a9687be6e8db3be6854c475621e007a5dc")),
            ok(hex!("c7518c8ae4660ed02894df8976fa1a3659c1a8b4b5bec0c4b872abeba4cb8964")),
            ok(hex!("2273e227a5b7449b6e70f1fb4652864038b1cbf9cd7c043a7d6456b7fc275ad8")),
            ok(hex!("27cddaa5624534cb6cb9d7da077cf2b22ab21e9b506fd4998a51d54502e99116")),
            ok(hex!("c65716add7aa98ba7acb236352d665cab17345fe45b55fb879ff80e6bd0c41dd")),
            ok(hex!("969660042a28f32d9be17344e09374b379962d03db1574df5a8a5a47e19ce3f2")),
            ok(hex!("a5a64476122ca0925fb344bdc1854c1c0a59fc614298e50a33e331980a220f32")),
            ok(hex!("05cde6323d949933f7f7b78776bcc1ea6d9b31447732e3802e1f7ac44b650e17")),
        ],
    },
    TestData {
        name: "insert_secret #1 incorrect",
        inserts: &[
            ok(hex!("02a40c85b6f28da08dfdbe0926c53fab2de6d28c10301f8f7c4073d5e42e3148")),
            fail(hex!("c7518c8ae4660ed02894df8976fa1a3659c1a8b4b5bec0c4b872abeba4cb8964")),
        ],
    },
    TestData {
        name: "insert_secret #2 incorrect (#1 derived from incorrect)",
        inserts: &[
            ok(hex!("02a40c85b6f28da08dfdbe0926c53fab2de6d28c10301f8f7c4073d5e42e3148")),
            ok(hex!("dddc3a8d14fddf2b68fa8c7fbad2748274937479dd0f8930d5ebb4ab6bd866a3")),
            ok(hex!("2273e227a5b7449b6e70f1fb4652864038b1cbf9cd7c043a7d6456b7fc275ad8")),
            fail(hex!("27cddaa5624534cb6cb9d7da077cf2b22ab21e9b506fd4998a51d54502e99116")),
        ],
    },
    TestData {
        name: "insert_secret #3 incorrect",
        inserts: &[
            ok(hex!("7cc854b54e3e0dcdb010d7a3fee464a9687be6e8db3be6854c475621e007a5dc")),
            ok(hex!("c7518c8ae4660ed02894df8976fa1a3659c1a8b4b5bec0c4b872abeba4cb8964")),
            ok(hex!("c51a18b13e8527e579ec56365482c62f180b7d5760b46e9477dae59e87ed423a")),
            fail(hex!("27cddaa5624534cb6cb9d7da077cf2b22ab21e9b506fd4998a51d54502e99116")),
        ],
    },
    TestData {
        name: "insert_secret #4 incorrect (1,2,3 derived from incorrect)",
        inserts: &[
            ok(hex!("02a40c85b6f28da08dfdbe0926c53fab2de6d28c10301f8f7c4073d5e42e3148")),
            ok(hex!("dddc3a8d14fddf2b68fa8c7fbad2748274937479dd0f8930d5ebb4ab6bd866a3")),
            ok(hex!("c51a18b13e8527e579ec56365482c62f180b7d5760b46e9477dae59e87ed423a")),
            ok(hex!("ba65d7b0ef55a3ba300d4e87af29868f394f8f138d78a7011669c79b37b936f4")),
            ok(hex!("c65716add7aa98ba7acb236352d665cab17345fe45b55fb879ff80e6bd0c41dd")),
            ok(hex!("969660042a28f32d9be17344e09374b379962d03db1574df5a8a5a47e19ce3f2")),
            ok(hex!("a5a64476122ca0925fb344bdc1854c1c0a59fc614298e50a33e331980a220f32")),
            fail(hex!("05cde6323d949933f7f7b78776bcc1ea6d9b31447732e3802e1f7ac44b650e17")),
        ],
    },
    TestData {
        name: "insert_secret #5 incorrect",
        inserts: &[
            ok(hex!("7cc854b54e3e0dcdb010d7a3fee464a9687be6e8db3be6854c475621e007a5dc")),
            ok(hex!("c7518c8ae4660ed02894df8976fa1a3659c1a8b4b5bec0c4b872abeba4cb8964")),
            ok(hex!("2273e227a5b7449b6e70f1fb4652864038b1cbf9cd7c043a7d6456b7fc275ad8")),
            ok(hex!("27cddaa5624534cb6cb9d7da077cf2b22ab21e9b506fd4998a51d54502e99116")),
            ok(hex!("631373ad5f9ef654bb3dade742d09504c567edd24320d2fcd68e3cc47e2ff6a6")),
            fail(hex!("969660042a28f32d9be17344e09374b379962d03db1574df5a8a5a47e19ce3f2")),
        ],
    },
    TestData {
        name: "insert_secret #6 incorrect (5 derived from incorrect)",
        inserts: &[
            ok(hex!("7cc854b54e3e0dcdb010d7a3fee464a9687be6e8db3be6854c475621e007a5dc")),
            ok(hex!("c7518c8ae4660ed02894df8976fa1a3659c1a8b4b5bec0c4b872abeba4cb8964")),
            ok(hex!("2273e227a5b7449b6e70f1fb4652864038b1cbf9cd7c043a7d6456b7fc275ad8")),
            ok(hex!("27cddaa5624534cb6cb9d7da077cf2b22ab21e9b506fd4998a51d54502e99116")),
            ok(hex!("631373ad5f9ef654bb3dade742d09504c567edd24320d2fcd68e3cc47e2ff6a6")),
            ok(hex!("b7e76a83668bde38b373970155c868a653304308f9896692f904a23731224bb1")),
            ok(hex!("a5a64476122ca0925fb344bdc1854c1c0a59fc614298e50a33e331980a220f32")),
            fail(hex!("05cde6323d949933f7f7b78776bcc1ea6d9b31447732e3802e1f7ac44b650e17")),
        ],
    },
    TestData {
        name: "insert_secret #7 incorrect",
        inserts: &[
            ok(hex!("7cc854b54e3e0dcdb010d7a3fee464a9687be6e8db3be6854c475621e007a5dc")),
            ok(hex!("c7518c8ae4660ed02894df8976fa1a3659c1a8b4b5bec0c4b872abeba4cb8964")),
            ok(hex!("2273e227a5b7449b6e70f1fb4652864038b1cbf9cd7c043a7d6456b7fc275ad8")),
            ok(hex!("27cddaa5624534cb6cb9d7da077cf2b22ab21e9b506fd4998a51d54502e99116")),
            ok(hex!("c65716add7aa98ba7acb236352d665cab17345fe45b55fb879ff80e6bd0c41dd")),
            ok(hex!("969660042a28f32d9be17344e09374b379962d03db1574df5a8a5a47e19ce3f2")),
            ok(hex!("e7971de736e01da8ed58b94c2fc216cb1dca9e326f3a96e7194fe8ea8af6c0a3")),
            fail(hex!("05cde6323d949933f7f7b78776bcc1ea6d9b31447732e3802e1f7ac44b650e17")),
        ],
    },
    TestData {
        name: "insert_secret #8 incorrect",
        inserts: &[
            ok(hex!("7cc854b54e3e0dcdb010d7a3fee464a9687be6e8db3be6854c475621e007a5dc")),
            ok(hex!("c7518c8ae4660ed02894df8976fa1a3659c1a8b4b5bec0c4b872abeba4cb8964")),
            ok(hex!("2273e227a5b7449b6e70f1fb4652864038b1cbf9cd7c043a7d6456b7fc275ad8")),
            ok(hex!("27cddaa5624534cb6cb9d7da077cf2b22ab21e9b506fd4998a51d54502e99116")),
            ok(hex!("c65716add7aa98ba7acb236352d665cab17345fe45b55fb879ff80e6bd0c41dd")),
            ok(hex!("969660042a28f32d9be17344e09374b379962d03db1574df5a8a5a47e19ce3f2")),
            ok(hex!("a5a64476122ca0925fb344bdc1854c1c0a59fc614298e50a33e331980a220f32")),
            fail(hex!("a7efbc61aac46d34f77778bac22c8a20c6a46ca460addc49009bda875ec88fa4")),
        ],
    },
];

#[test]
fn test_bolt3_sha_chain_insert() {
    for test in &INSERT_TESTS {
        let mut receiver = RevocationStore::new();
        for insert in test.inserts {
            let commitment_number = receiver.next_commitment_number();
            match receiver.add_next_entry(insert.secret) {
                Ok(()) if !insert.successful => {
                    panic!("{}: error wasn't received for #{}", test.name, commitment_number)
                }
                Err(e) if insert.successful => {
                    panic!("{}: error was received but it shouldn't: {}", test.name, e)
                }
                Err(e) => {
                    assert_eq!(e, ShachainError::InconsistentSecret(commitment_number));
                    assert_eq!(receiver.next_commitment_number(), commitment_number);
                }
                Ok(()) => (),
            }
        }
    }
}

#[test]
fn test_look_up_after_insert() {
    let producer = RevocationProducer::new([0x5a; 32]);
    let mut receiver = RevocationStore::new();
    assert!(receiver.is_empty());

    for commitment_number in 0..100 {
        receiver.add_next_entry(producer.at_index(commitment_number).unwrap()).unwrap();
    }

    for commitment_number in 0..100 {
        assert_eq!(
            receiver.look_up(commitment_number).unwrap(),
            producer.at_index(commitment_number).unwrap(),
        );
    }
    assert_eq!(receiver.look_up(100), Err(ShachainError::UnknownSecret(100)));
}

#[test]
fn test_rejected_secret_leaves_store_usable() {
    let producer = RevocationProducer::new([0x5a; 32]);
    let mut receiver = RevocationStore::new();

    receiver.add_next_entry(producer.at_index(0).unwrap()).unwrap();
    assert!(receiver.add_next_entry([0; 32]).is_err());
    receiver.add_next_entry(producer.at_index(1).unwrap()).unwrap();

    assert_eq!(receiver.look_up(0).unwrap(), producer.at_index(0).unwrap());
    assert_eq!(receiver.look_up(1).unwrap(), producer.at_index(1).unwrap());
}
