use crate::defs::Square;

/// Parse a square in algebraic notation, eg `e4`
pub fn square_from_string(s: &str) -> Option<Square> {
    let mut chars = s.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }

    let file = file as Square - 'a' as Square;
    let rank = rank as Square - '1' as Square;
    Some(rank * 8 + file)
}

pub fn square_to_string(sq: Square) -> String {
    let (file, rank) = coord_from_square(sq);
    let mut s = String::with_capacity(2);
    s.push((b'a' + file as u8) as char);
    s.push((b'1' + rank as u8) as char);
    s
}

/// (file, rank), both 0-7
pub const fn coord_from_square(sq: Square) -> (Square, Square) {
    (sq % 8, sq / 8)
}
