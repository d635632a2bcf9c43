//! Link attribute rules and link flag files.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Volume-delay function code used for toll plazas.
pub const TOLL_PLAZA_VDF: u8 = 7;

/// TOLLTYPE code for a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TollType {
    NotTolled,
    /// Fixed cost (toll plaza).
    Fixed,
    /// Distance-based rate.
    PerMile,
}

impl TollType {
    pub fn code(&self) -> u8 {
        match self {
            TollType::NotTolled => 0,
            TollType::Fixed => 1,
            TollType::PerMile => 2,
        }
    }
}

pub fn determine_tolltype(vdf: u8, cost: f64) -> TollType {
    if cost > 0.0 {
        if vdf == TOLL_PLAZA_VDF {
            TollType::Fixed
        } else {
            TollType::PerMile
        }
    } else {
        TollType::NotTolled
    }
}

/// A network arc selected for a flag file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagLink {
    pub anode: u32,
    pub bnode: u32,
    /// 1 for one-way, 2 or more when the arc also runs `bnode -> anode`.
    pub directions: u8,
}

/// Write `l=anode,bnode` lines for every directional link, preceded by a
/// comment naming the selection query.
pub fn write_arc_flag_file<W: Write>(
    mut writer: W,
    query: &str,
    links: &[FlagLink],
) -> io::Result<usize> {
    writeln!(writer, "~# {} links", query.trim())?;
    let mut written = 0;
    for link in links {
        writeln!(writer, "l={},{}", link.anode, link.bnode)?;
        written += 1;
        if link.directions > 1 {
            writeln!(writer, "l={},{}", link.bnode, link.anode)?;
            written += 1;
        }
    }
    writer.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolltype() {
        assert_eq!(determine_tolltype(7, 1.5), TollType::Fixed);
        assert_eq!(determine_tolltype(1, 0.25), TollType::PerMile);
        assert_eq!(determine_tolltype(7, 0.0), TollType::NotTolled);
        assert_eq!(TollType::PerMile.code(), 2);
    }

    #[test]
    fn test_flag_file_expands_two_way_links() {
        let links = [
            FlagLink { anode: 5001, bnode: 5002, directions: 1 },
            FlagLink { anode: 5003, bnode: 5004, directions: 2 },
        ];
        let mut out = Vec::new();
        let written = write_arc_flag_file(&mut out, "  \"TOLLSYS\" = 1 ", &links).unwrap();
        assert_eq!(written, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "~# \"TOLLSYS\" = 1 links\nl=5001,5002\nl=5003,5004\nl=5004,5003\n"
        );
    }

    #[test]
    fn test_flag_file_empty_selection() {
        let mut out = Vec::new();
        assert_eq!(write_arc_flag_file(&mut out, "x", &[]).unwrap(), 0);
        assert_eq!(out, b"~# x links\n");
    }
}
