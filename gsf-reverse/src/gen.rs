//! Symbolic inversion of one generator-level advance.
//!
//! The generator level starts from a fresh state `(s0 = G, s1 = C1)`,
//! emits the slot roll, advances, and its second output is the entity
//! seed. Recovering `G` from that second output means undoing one
//! xoroshiro128+ state transition with a 64-bit unknown. Brute force
//! over 2^64 is out of the question, but as a bit-vector formula the
//! transition is tiny: one unknown word, fixed rotations and shifts,
//! one equality. The solver enumerates the handful of satisfying
//! assignments (usually 0 to 3; multiple solutions come from the
//! shift-and-xor feedback).

use gsf_core::rng::XOROSHIRO_CONST1;
use z3::ast::{Ast, BV};
use z3::{Config, Context, SatResult, Solver};

fn rotl<'ctx>(ctx: &'ctx Context, x: &BV<'ctx>, amount: u64) -> BV<'ctx> {
    let left = x.bvshl(&BV::from_u64(ctx, amount, 64));
    let right = x.bvlshr(&BV::from_u64(ctx, 64 - amount, 64));
    left.bvor(&right)
}

/// Enumerate every generator seed whose freshly seeded stream emits
/// `entity_seed` as its second output. Returns a sorted list; empty when
/// no predecessor exists.
///
/// The solver context is created per call and dropped on return. It is
/// not `Send`; never share it across worker threads — call this from
/// whichever thread needs the answer instead.
pub fn reverse_gen_seeds(entity_seed: u64) -> Vec<u64> {
    let cfg = Config::new();
    let ctx = Context::new(&cfg);
    let solver = Solver::new(&ctx);

    let s0 = BV::new_const(&ctx, "s0", 64);
    let s1 = BV::from_u64(&ctx, XOROSHIRO_CONST1, 64);

    // One advance. The first output (slot roll) is unconstrained.
    let s1x = s1.bvxor(&s0);
    let shifted = s1x.bvshl(&BV::from_u64(&ctx, 16, 64));
    let s0_next = rotl(&ctx, &s0, 24).bvxor(&s1x).bvxor(&shifted);
    let s1_next = rotl(&ctx, &s1x, 37);

    // The second output is the entity seed.
    let second = s0_next.bvadd(&s1_next);
    solver.assert(&second._eq(&BV::from_u64(&ctx, entity_seed, 64)));

    let mut seeds = Vec::new();
    // Unknown ends the enumeration exactly like Unsat: whatever was
    // already found is the answer.
    while solver.check() == SatResult::Sat {
        let value = solver
            .get_model()
            .and_then(|model| model.eval(&s0, true))
            .and_then(|ast| ast.as_u64());
        let value = match value {
            Some(v) => v,
            None => break,
        };
        seeds.push(value);
        solver.assert(&s0._eq(&BV::from_u64(&ctx, value, 64)).not());
    }
    seeds.sort_unstable();
    seeds
}
