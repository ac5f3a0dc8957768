//! Library of parser functions for the 11-column numeric fields

// internal modules
use crate::error::{Error, Result};

// rendf modules
use rendf_format::f;

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit0, digit1, one_of};
use nom::combinator::{opt, recognize};
use nom::sequence::{pair, preceded, tuple};
use nom::IResult;

/// Signed decimal mantissa, e.g. `-1.23`, `.5`, `9`
fn mantissa(i: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(one_of("+-")),
        alt((
            recognize(tuple((digit1, opt(pair(tag("."), digit0))))),
            recognize(pair(tag("."), digit1)),
        )),
    ))(i)
}

/// Exponent with the letter, or sign-delimited without it
fn exponent(i: &str) -> IResult<&str, &str> {
    alt((
        preceded(one_of("eE"), recognize(pair(opt(one_of("+-")), digit1))),
        recognize(pair(one_of("+-"), digit1)),
    ))(i)
}

/// Full field body split into mantissa and optional exponent
fn number(i: &str) -> IResult<&str, (&str, Option<&str>)> {
    pair(mantissa, opt(exponent))(i)
}

/// One float slot; blank means zero
pub(crate) fn float_field(slot: &str, line: usize) -> Result<f64> {
    let text = slot.trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    let format_error = || Error::Format {
        line,
        text: slot.trim().to_string(),
    };
    match number(text) {
        Ok(("", (mantissa, exponent))) => match exponent {
            Some(exp) => f!("{mantissa}e{exp}").parse().map_err(|_| format_error()),
            None => mantissa.parse().map_err(|_| format_error()),
        },
        _ => Err(format_error()),
    }
}

/// One integer slot; blank means zero
pub(crate) fn int_field(slot: &str, line: usize) -> Result<i64> {
    let text = slot.trim();
    if text.is_empty() {
        return Ok(0);
    }
    let integer = recognize(pair(
        opt(one_of::<_, _, nom::error::Error<&str>>("+-")),
        digit1,
    ))(text);
    match integer {
        Ok(("", digits)) => digits.parse().map_err(|_| Error::Format {
            line,
            text: slot.trim().to_string(),
        }),
        _ => Err(Error::Format {
            line,
            text: slot.trim().to_string(),
        }),
    }
}
