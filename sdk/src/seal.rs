//! Seal encoding
//!
//! A seal is a Groth16 proof prefixed with the selector of the verifier that
//! can check it. Provers emit proofs with `pi_a` un-negated; the on-chain
//! verifiers expect `-pi_a`, so encoding negates it on BN254.

use num_bigint::BigUint;
use verifier_router::{Proof, Selector, SELECTOR_LEN};

use crate::error::{SdkError, SdkResult};

/// Raw Groth16 proof length: `pi_a` (64) + `pi_b` (128) + `pi_c` (64)
pub const PROOF_LEN: usize = 256;

/// Encoded seal length
pub const SEAL_LEN: usize = SELECTOR_LEN + PROOF_LEN;

/// BN254 base field modulus, big-endian
const BN254_BASE_FIELD_MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seal {
    pub selector: Selector,
    pub proof: Proof,
}

impl Seal {
    /// Wire form: selector followed by `pi_a || pi_b || pi_c`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SEAL_LEN);
        out.extend_from_slice(&self.selector);
        out.extend_from_slice(&self.proof.pi_a);
        out.extend_from_slice(&self.proof.pi_b);
        out.extend_from_slice(&self.proof.pi_c);
        out
    }
}

/// Split a raw prover seal into proof points, negate `pi_a` and tag it with
/// `selector`
pub fn encode_seal_with_selector(seal: &[u8; PROOF_LEN], selector: Selector) -> Seal {
    let mut proof = split_proof(seal);
    proof.pi_a = negate_g1(&proof.pi_a);
    Seal { selector, proof }
}

/// Parse an encoded seal. Points are taken as-is.
pub fn decode_seal(bytes: &[u8]) -> SdkResult<Seal> {
    if bytes.len() != SEAL_LEN {
        return Err(SdkError::InvalidSealLength {
            expected: SEAL_LEN,
            actual: bytes.len(),
        });
    }

    let (selector_bytes, proof_bytes) = bytes.split_at(SELECTOR_LEN);
    let mut selector = [0u8; SELECTOR_LEN];
    selector.copy_from_slice(selector_bytes);
    let mut raw = [0u8; PROOF_LEN];
    raw.copy_from_slice(proof_bytes);

    Ok(Seal {
        selector,
        proof: split_proof(&raw),
    })
}

fn split_proof(raw: &[u8; PROOF_LEN]) -> Proof {
    let mut proof = Proof {
        pi_a: [0u8; 64],
        pi_b: [0u8; 128],
        pi_c: [0u8; 64],
    };
    proof.pi_a.copy_from_slice(&raw[..64]);
    proof.pi_b.copy_from_slice(&raw[64..192]);
    proof.pi_c.copy_from_slice(&raw[192..]);
    proof
}

/// Negate a G1 point given as big-endian `x || y`: `(x, y) -> (x, q - y)`
///
/// The point at infinity (all zeros) maps to itself.
pub fn negate_g1(point: &[u8; 64]) -> [u8; 64] {
    let q = BigUint::from_bytes_be(&BN254_BASE_FIELD_MODULUS);
    let y = BigUint::from_bytes_be(&point[32..]) % &q;
    let negated = (&q - y) % &q;

    let mut out = [0u8; 64];
    out[..32].copy_from_slice(&point[..32]);
    let y_bytes = negated.to_bytes_be();
    out[64 - y_bytes.len()..].copy_from_slice(&y_bytes);
    out
}
