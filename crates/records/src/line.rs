//! Card-level assembly and identity verification
//!
//! A card holds 66 data columns split into six 11-column fields, followed
//! by the identity tail: MAT (4 columns), MF (2), MT (3) and an optional
//! sequence number (up to 5). Reading verifies the tail against the
//! identity passed down by the enclosing record; writing stamps the
//! identity and leaves the sequence columns blank.

// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::parsers::{float_field, int_field};

// rendf modules
use rendf_format::{f, NumFormat};

/// Wrap-around point for the running sequence number
const SEQUENCE_LIMIT: usize = 99999;

/// The six data slots of one verified card
#[derive(Debug, PartialEq)]
pub(crate) struct Card<'a> {
    slots: [&'a str; 6],
    line: usize,
}

impl<'a> Card<'a> {
    /// Float value of the given slot (0..6)
    pub(crate) fn float(&self, slot: usize) -> Result<f64> {
        float_field(self.slots[slot], self.line)
    }

    /// Integer value of the given slot (0..6)
    pub(crate) fn int(&self, slot: usize) -> Result<i64> {
        int_field(self.slots[slot], self.line)
    }

    /// Line number the card was read from
    pub(crate) fn line(&self) -> usize {
        self.line
    }
}

/// Read one card and verify its identity tail
pub(crate) fn read_card<'a>(
    cursor: &mut Cursor<'a>,
    mat: i32,
    mf: i32,
    mt: i32,
) -> Result<Card<'a>> {
    let (text, line) = cursor.take_line()?;
    if !text.is_ascii() {
        return Err(Error::Format {
            line,
            text: text.to_string(),
        });
    }
    if text.len() < 75 {
        return Err(Error::Truncated {
            line,
            found: text.len(),
        });
    }

    check(line, "MAT", &text[66..70], mat as i64)?;
    check(line, "MF", &text[70..72], mf as i64)?;
    check(line, "MT", &text[72..75], mt as i64)?;

    // a present sequence number must match the running counter
    let sequence = &text[75..text.len().min(80)];
    if !sequence.trim().is_empty() {
        let expected = ((line - 1) % SEQUENCE_LIMIT + 1) as i64;
        check(line, "NS", sequence, expected)?;
    }

    let slots = core::array::from_fn(|slot| &text[11 * slot..11 * slot + 11]);
    Ok(Card { slots, line })
}

fn check(line: usize, label: &'static str, slot: &str, expected: i64) -> Result<()> {
    let found = int_field(slot, line)?;
    if found != expected {
        return Err(Error::Trailer {
            line,
            label,
            expected,
            found,
        });
    }
    Ok(())
}

/// Append one card: 66 data columns, identity, blank sequence columns
pub(crate) fn write_card(out: &mut String, data: &str, mat: i32, mf: i32, mt: i32) {
    out.push_str(&f!("{data:<66}{mat:>4}{mf:>2}{mt:>3}     \n"));
}

/// Fixed 11-column float slot
pub(crate) fn float_slot(value: f64) -> String {
    f!("{:>11}", value.sci_signed(11))
}

/// Fixed 11-column integer slot
pub(crate) fn int_slot(value: i64) -> String {
    f!("{value:>11}")
}

/// Control-shaped card: two float slots and four integer slots
#[allow(clippy::too_many_arguments)]
pub(crate) fn write_control(
    out: &mut String,
    c1: f64,
    c2: f64,
    l1: i64,
    l2: i64,
    n1: i64,
    n2: i64,
    mat: i32,
    mf: i32,
    mt: i32,
) {
    let data = f!(
        "{}{}{}{}{}{}",
        float_slot(c1),
        float_slot(c2),
        int_slot(l1),
        int_slot(l2),
        int_slot(n1),
        int_slot(n2)
    );
    write_card(out, &data, mat, mf, mt);
}

/// Read `count` float values over as many cards as needed, six per card
pub(crate) fn read_values(
    cursor: &mut Cursor,
    mat: i32,
    mf: i32,
    mt: i32,
    count: usize,
) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(count);
    while values.len() < count {
        let card = read_card(cursor, mat, mf, mt)?;
        let take = (count - values.len()).min(6);
        for slot in 0..take {
            values.push(card.float(slot)?);
        }
    }
    Ok(values)
}

/// Write values six to a card, padding the final card with blanks
pub(crate) fn write_values(out: &mut String, values: &[f64], mat: i32, mf: i32, mt: i32) -> usize {
    let mut lines = 0;
    for chunk in values.chunks(6) {
        let data: String = chunk.iter().map(|value| float_slot(*value)).collect();
        write_card(out, &data, mat, mf, mt);
        lines += 1;
    }
    lines
}

/// Read `count` (boundary, scheme) integer pairs, three pairs per card
pub(crate) fn read_interpolation(
    cursor: &mut Cursor,
    mat: i32,
    mf: i32,
    mt: i32,
    count: usize,
) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut boundaries = Vec::with_capacity(count);
    let mut interpolants = Vec::with_capacity(count);
    while boundaries.len() < count {
        let card = read_card(cursor, mat, mf, mt)?;
        let take = (count - boundaries.len()).min(3);
        for pair in 0..take {
            boundaries.push(card.int(2 * pair)?);
            interpolants.push(card.int(2 * pair + 1)?);
        }
    }
    Ok((boundaries, interpolants))
}

/// Write (boundary, scheme) pairs, three pairs per card
pub(crate) fn write_interpolation(
    out: &mut String,
    boundaries: &[i64],
    interpolants: &[i64],
    mat: i32,
    mf: i32,
    mt: i32,
) -> usize {
    let mut lines = 0;
    for (bounds, schemes) in boundaries.chunks(3).zip(interpolants.chunks(3)) {
        let data: String = bounds
            .iter()
            .zip(schemes)
            .map(|(boundary, scheme)| f!("{}{}", int_slot(*boundary), int_slot(*scheme)))
            .collect();
        write_card(out, &data, mat, mf, mt);
        lines += 1;
    }
    lines
}

/// Read `count` (x, y) float pairs, three pairs per card
pub(crate) fn read_pairs(
    cursor: &mut Cursor,
    mat: i32,
    mf: i32,
    mt: i32,
    count: usize,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut x = Vec::with_capacity(count);
    let mut y = Vec::with_capacity(count);
    while x.len() < count {
        let card = read_card(cursor, mat, mf, mt)?;
        let take = (count - x.len()).min(3);
        for pair in 0..take {
            x.push(card.float(2 * pair)?);
            y.push(card.float(2 * pair + 1)?);
        }
    }
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTROL: &str =
        " 9.223500+4 2.330248+2          0          1          0          09228 1452     \n";

    #[test]
    fn identity_is_verified() {
        let mut cursor = Cursor::new(CONTROL);
        let card = read_card(&mut cursor, 9228, 1, 452).unwrap();
        assert_eq!(card.float(0).unwrap(), 92235.0);
        assert_eq!(card.float(1).unwrap(), 233.0248);
        assert_eq!(card.int(3).unwrap(), 1);
    }

    #[test]
    fn wrong_identity_is_rejected() {
        let mut cursor = Cursor::new(CONTROL);
        assert_eq!(
            read_card(&mut cursor, 9437, 1, 452),
            Err(Error::Trailer {
                line: 1,
                label: "MAT",
                expected: 9437,
                found: 9228
            })
        );

        let mut cursor = Cursor::new(CONTROL);
        assert_eq!(
            read_card(&mut cursor, 9228, 3, 452),
            Err(Error::Trailer {
                line: 1,
                label: "MF",
                expected: 3,
                found: 1
            })
        );

        let mut cursor = Cursor::new(CONTROL);
        assert_eq!(
            read_card(&mut cursor, 9228, 1, 2),
            Err(Error::Trailer {
                line: 1,
                label: "MT",
                expected: 2,
                found: 452
            })
        );
    }

    #[test]
    fn sequence_numbers_follow_the_counter() {
        let numbered = f!("{}{:>5}\n", &CONTROL[..75], 1);
        let mut cursor = Cursor::new(&numbered);
        assert!(read_card(&mut cursor, 9228, 1, 452).is_ok());

        let missequenced = f!("{}{:>5}\n", &CONTROL[..75], 7);
        let mut cursor = Cursor::new(&missequenced);
        assert_eq!(
            read_card(&mut cursor, 9228, 1, 452),
            Err(Error::Trailer {
                line: 1,
                label: "NS",
                expected: 1,
                found: 7
            })
        );
    }

    #[test]
    fn narrow_cards_are_rejected() {
        let mut cursor = Cursor::new("too short\n");
        assert_eq!(
            read_card(&mut cursor, 9228, 1, 452),
            Err(Error::Truncated { line: 1, found: 9 })
        );
    }

    #[test]
    fn cards_are_stamped_and_padded() {
        let mut out = String::new();
        write_control(&mut out, 92235.0, 233.0248, 0, 1, 0, 0, 9228, 1, 452);
        assert_eq!(out, CONTROL);

        let mut out = String::new();
        let lines = write_values(&mut out, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], 9228, 3, 102);
        assert_eq!(lines, 2);
        assert_eq!(
            out,
            " 1.000000+0 2.000000+0 3.000000+0 4.000000+0 5.000000+0 6.000000+09228 3102     \n \
             7.000000+0                                                       9228 3102     \n"
        );
    }
}
