//! Contest problems. Every problem reads its instances from a token stream and writes one
//! answer per instance; the [`Driver`] decides how instances are delimited.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::{
    errors::{Result, SolveError},
    flow::*,
    geometry::*,
    graph::*,
    io::TokenReader,
    lp::*,
};

/// How the instances of a problem are delimited in the input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Driver {
    /// The input starts with the number of test cases
    Counted,
    /// Test cases repeat until one starts with a terminating value
    Sentinel,
    /// Exactly one instance
    Single,
}

/// Returned by a test case to signal whether further instances follow
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub trait Problem {
    const NAME: &'static str;
    const DRIVER: Driver;

    /// Reads one instance and writes its answer. Sentinel problems return [`Flow::Stop`]
    /// on the terminating instance (or at the end of the input) without writing anything.
    fn testcase<R: BufRead, W: Write>(input: &mut TokenReader<R>, output: &mut W) -> Result<Flow>;
}

/// Runs all instances of `P` found in `input`
pub fn run<P: Problem, R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    let mut input = TokenReader::new(input);

    match P::DRIVER {
        Driver::Counted => {
            let t: usize = input.next("number of test cases")?;
            info!("{}: {} test cases", P::NAME, t);
            for i in 0..t {
                debug!("{}: test case {}", P::NAME, i + 1);
                P::testcase(&mut input, &mut output)?;
            }
        }
        Driver::Sentinel => {
            let mut i = 0;
            while P::testcase(&mut input, &mut output)? == Flow::Continue {
                i += 1;
                debug!("{}: finished test case {}", P::NAME, i);
            }
            info!("{}: {} test cases", P::NAME, i);
        }
        Driver::Single => {
            P::testcase(&mut input, &mut output)?;
        }
    }

    output.flush()?;
    Ok(())
}

macro_rules! register_problems {
    ($($module:ident),* $(,)?) => {
        $(pub mod $module;)*

        paste::paste! {
            /// Names of all registered problems in registration order
            pub const PROBLEM_NAMES: &[&str] = &[$($module::[<$module:camel>]::NAME),*];

            /// Runs the problem registered as `name`
            pub fn run_by_name<R: BufRead, W: Write>(name: &str, input: R, output: W) -> Result<()> {
                $(
                    if name == $module::[<$module:camel>]::NAME {
                        return run::<$module::[<$module:camel>], R, W>(input, output);
                    }
                )*
                Err(SolveError::UnknownProblem(name.to_string()))
            }
        }
    };
}

register_problems!(
    // sliding windows, sums and dynamic programming
    dominoes,
    even_pairs,
    even_matrices,
    search_snippets,
    beach_bars,
    burning_coins,
    great_game,
    deck_of_cards,
    magician_coin,
    defensive_line,
    punch,
    high_school_teams,
    poker_chips,
    planks,
    san_francisco,
    light_pattern,
    corbusier,
    moving_books,
    new_tiles,
    alice_accumulation,
    boats,
    attack_of_the_clones,
    evolution,
    new_york,
    // geometry
    hit,
    first_hit,
    antenna,
    almost_antenna,
    hiking_maps,
    graypes,
    bistro,
    h1n1,
    germs,
    light,
    bobs_burden,
    clues,
    goldeneye,
    hongkong,
    domino_snakes,
    snakes_strike_back,
    use_them_all,
    // graphs
    graphs,
    ant_challenge,
    important_bridges,
    buddies,
    shortest_paths,
    return_of_the_jedi,
    planet_express,
    majestys_secret_service,
    marathon,
    octopussy,
    // flows
    coin_tossing,
    shopping,
    kingdom_defence,
    tetris,
    satellites,
    algocoon,
    real_estate,
    canteen,
    carsharing,
    casino_royale,
    cantonal_courier,
    london,
    india,
    fleetrace,
    // linear and quadratic programming
    diet,
    inball,
    strikesback,
    radiation,
    suez,
    worldcup,
    software_update,
    maximum,
    portfolios,
);
