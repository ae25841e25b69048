//! Known-answer vectors for the RSA-sized arithmetic paths.

use mpint::{ExpModCache, Mpi, RandMpi, Sign};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn hex(s: &str) -> Mpi {
    Mpi::from_str_radix(s, 16).unwrap()
}

fn test_a() -> Mpi {
    hex(concat!(
        "EFE021C2645FD1DC586E69184AF4A31E",
        "D5F53E93B5F123FA41680867BA110131",
        "944FE7952E2517337780CB0DB80E61AA",
        "E7C8DDC6C5C6AADEB34EB38A2F40D5E6"
    ))
}

fn test_e() -> Mpi {
    hex(concat!(
        "B2E7EFD37075B9F03FF989C7C5051C20",
        "34D2A323810251127E7BF8625A4F49A5",
        "F3E27F4DA8BD59C47D6DAABA4C8127BD",
        "5B5C25763222FEFCCFC38B832366C29E"
    ))
}

fn test_n() -> Mpi {
    hex(concat!(
        "0066A198186C18C10B2F5ED9B522752A",
        "9830B69916E535C8F047518A889A43A5",
        "94B6BED27A168D31D4A52F88925AA8F5"
    ))
}

#[test]
fn mul_known_answer() {
    let expect = hex(concat!(
        "602AB7ECA597A3D6B56FF9829A5E8B85",
        "9E857EA95A03512E2BAE7391688D264A",
        "A5663B0341DB9CCFD2C4C5F421FEC814",
        "8001B72E848A38CAE1C65F78E56ABDEF",
        "E12D3C039B8A02D6BE593F0BBBDA56F1",
        "ECF677152EF804370C1A305CAF3B5BF1",
        "30879B56C61DE584A0F53A2447A51E"
    ));

    assert_eq!(test_a() * test_n(), expect);
}

#[test]
fn div_known_answer() {
    let expect_q = hex("256567336059E52CAE22925474705F39A94");
    let expect_r = hex(concat!(
        "6613F26162223DF488E9CD48CC132C7A",
        "0AC93C701B001B092E4E5B9F73BCD27B",
        "9EE50D0657C77F374E903CDFA4C642"
    ));

    let (q, r) = test_a().div_rem(&test_n()).unwrap();
    assert_eq!(q, expect_q);
    assert_eq!(r, expect_r);
}

#[test]
fn exp_mod_known_answer() {
    let expect = hex(concat!(
        "36E139AEA55215609D2816998ED020BB",
        "BD96C37890F65171D948E9BC7CBAA4D9",
        "325D24D6A3C12710F10A09FA08AB87"
    ));

    assert_eq!(test_a().exp_mod(&test_e(), &test_n()).unwrap(), expect);

    // The cached path must agree with the cold path.
    let mut cache = ExpModCache::default();
    assert_eq!(
        test_a().exp_mod_with(&test_e(), &test_n(), &mut cache).unwrap(),
        expect
    );
    assert_eq!(
        test_a().exp_mod_with(&test_e(), &test_n(), &mut cache).unwrap(),
        expect
    );
}

#[test]
fn inv_mod_known_answer() {
    let expect = hex(concat!(
        "003A0AAEDD7E784FC07D8F9EC6E3BFD5",
        "C3DBA76456363A10869622EAC2DD84EC",
        "C5B8A74DAC4D09E03B5E0BE779F2DF61"
    ));

    assert_eq!(test_a().inv_mod(&test_n()).unwrap(), expect);
}

#[test]
fn gcd_known_answers() {
    for (a, b, g) in [
        (693i64, 609i64, 21i64),
        (1764, 868, 28),
        (768_454_923, 542_167_814, 1),
    ] {
        assert_eq!(Mpi::from(a).gcd(&Mpi::from(b)).unwrap(), Mpi::from(g));
    }
}

#[test]
fn binary_roundtrip() {
    let a = test_a();
    let bytes = a.to_bytes_be();
    assert_eq!(bytes.len(), a.byte_len());
    assert_eq!(Mpi::from_bytes_be(&bytes).unwrap(), a);

    // Exact-length export with left padding.
    let mut buf = vec![0u8; bytes.len() + 5];
    a.write_bytes_be(&mut buf).unwrap();
    assert_eq!(&buf[..5], &[0; 5]);
    assert_eq!(Mpi::from_bytes_be(&buf).unwrap(), a);
}

#[test]
fn string_roundtrip() {
    let a = test_a();
    for radix in 2..=16 {
        let s = a.to_str_radix(radix).unwrap();
        assert_eq!(Mpi::from_str_radix(&s, radix).unwrap(), a, "radix {radix}");
    }

    let neg = -test_n();
    let s = neg.to_str_radix(10).unwrap();
    assert!(s.starts_with('-'));
    assert_eq!(Mpi::from_str_radix(&s, 10).unwrap(), neg);
}

#[test]
fn modular_identities() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);
    let a = rng.gen_mpi(64).unwrap();
    let n = test_n();

    // A = Q*N + R and 0 <= (A mod N) < N
    let (q, r) = a.div_rem(&n).unwrap();
    assert_eq!(&q * &n + &r, a);

    let m = a.rem_euclid(&n).unwrap();
    assert!(m < n);
    assert_eq!((&a - &m).rem_euclid(&n).unwrap(), Mpi::new());
}

#[test]
fn exp_identities() {
    let n = test_n();
    let a = test_a();

    assert_eq!(a.exp_mod(&Mpi::new(), &n).unwrap(), Mpi::from(1u64));
    assert_eq!(
        a.exp_mod(&Mpi::from(1u64), &n).unwrap(),
        a.rem_euclid(&n).unwrap()
    );
}

#[test]
fn inverse_identity() {
    let a = test_a();
    let n = test_n();
    let x = a.inv_mod(&n).unwrap();
    assert_eq!((&a * &x).rem_euclid(&n).unwrap(), Mpi::from(1u64));
}

#[test]
fn generated_primes_are_odd_and_sized() {
    let mut rng = XorShiftRng::from_seed([2u8; 16]);
    let p = rng.gen_prime(128).unwrap();
    assert_eq!(p.bits(), 128);
    assert_eq!(p.sign(), Sign::Plus);
    assert!(p.bit(0));
    assert_eq!(p.is_prime(&mut rng), Ok(()));
}
