//! Stages shipped with the game.
//!
//! Layout legend:
//!
//! ```text
//!  X  solid tile            P  player start
//!  E  enemy [distance, speed]
//!  J  janitor item          B  banker item
//!  C  point obstacle        O  interact obstacle [id]
//!  W  water                 L  lever [id]
//!  N  janitor exit          M  banker exit
//!  Z  reserved marker
//! ```
//!
//! Parameters are listed in the order their cells appear, left to right and
//! top to bottom.

use crate::config::LevelDefinition;

pub const VAULT: [&str; 16] = [
    "XXXXXXXXXXXXXXXXXXXXXXXXXXXX",
    "X     C                    X",
    "X     X       C     N  M   X",
    "X C    XXXXXXXXXXXXXXXXXXXXX",
    "XXXXX   X                  X",
    "XXXXX      XXXXXX          X",
    "XXXXXXXXXXXXXXXXXXXXXX     X",
    "X        C                 X",
    "X    XXXXXXXXXXX  C        X",
    "X              XXXXXXXXXXXXX",
    "X   E  B                   X",
    "XXXXXXXXXXXXXX             X",
    "X  P         XXXXXXXXXX    X",
    "XXXXXXXXXXX     C   C    XXX",
    "X  J                       X",
    "XXXXXXXXXXXXXXXXXXXXXXXXXXXX",
];
pub const VAULT_PARAMS: [&[i32]; 1] = [&[350, 2]];

pub const CLIFFS: [&str; 16] = [
    "                            ",
    "                            ",
    " J     C N                  ",
    " XX    XXX            XX    ",
    " XXPX          M            ",
    " XXXX         XX         XX ",
    " XXXX  BE     XX            ",
    " XX    XXXXXXXX   XX  XX    ",
    "       X  XXXX    XX  XXX   ",
    "    XXXX  XXXXXX  XX  XXXX  ",
    "XXXXXXXX  XXXXXX  XX  XXXX  ",
    "XXXXXXXX  XXXXXX  XX  XXXX  ",
    "XXXXXXXX  XXXXXX  XX  XXXX  ",
    "XXXXXXXX  XXXXXX  XX  XXXX  ",
    "XXXXXXXX  XXXXXX  XX  XXXX  ",
    "XXXXXXXX  XXXXXX  XX  XXXX  ",
];
pub const CLIFFS_PARAMS: [&[i32]; 1] = [&[225, 2]];

pub const TOWER: [&str; 16] = [
    "XXXXXXXXXXXXXXXXXXXXXXXXXXXX",
    "XX          NM    XXXXXXXXXX",
    "XXX         XXX    XXXXXXXXX",
    "XXXX          X     XXXXXXXX",
    "XXXX P        X      XXXXXXX",
    "XXXXXX       XXX      XXXXXX",
    "XXXXXXX X              XXXXX",
    "XXXXXXX X                XXXX",
    "XXXXXXXXX                XXX",
    "XXXXXXXXXX                XX",
    "XXXXXXXXXXX                X",
    "XXXXXXXXXXXX   E           X",
    "XXXXXXXXXXXXX              X",
    "XXXXXXXXXXXXXX             X",
    "XXXXXXXXXXXXXXX            X",
    "XXXXXXXXXXXXXXXX           X",
];
pub const TOWER_PARAMS: [&[i32]; 1] = [&[335, 2]];

pub const FLOODED_HALL: [&str; 16] = [
    "XXXXXXXXXXXXXXXXXXXXXXXXXXXX",
    "X                         PX",
    "X         C           C   XX",
    "X  X  X   X   X   X   X  XXX",
    "X XXWWWWWWWWWWWWWWWWWWWWWXXX",
    "X                          X",
    "X                  N   M   X",
    "X XXXXXXXXXXXXXXXXXXXXXXXXXX",
    "X                          X",
    "XX                  C      X",
    "XXX                  X     X",
    "XXXXX E  C  X E CX ECX     X",
    "XXXXXXXXXXXXXXXXXXXXXXXXXX X",
    "X                          X",
    "X  J                    XXXX",
    "XXXXXXXXXXXXXXXXXXXXXXXXXXXX",
];
pub const FLOODED_HALL_PARAMS: [&[i32]; 3] = [&[100, 2], &[80, 2], &[35, 3]];

pub const WORKSHOP: [&str; 16] = [
    "XXXXXXXXXXXXXXXXXXXXXXXXXXXX",
    "X     C                    X",
    "X     X       C   N  M     X",
    "X C    XXXXXXXXXXXXXXXXXXXXX",
    "XXXXX   X                  X",
    "XXXXX      XXXXXX          X",
    "XXXXXXXXXXXXXXXXXXXXXX     X",
    "X     O                    X",
    "X    XXXXXXXXXXX  C        X",
    "X              XXXXXXXXXXXXX",
    "XL      E                  X",
    "XXXXXXXXXXXXXX             X",
    "X  P         XXXXXXXXXX    X",
    "XXXXXXXXXXX     C   C    XXX",
    "X  J      J   B            X",
    "XXXXXXXXXXXWWXXXWWWWXXXXXXXX",
];
pub const WORKSHOP_PARAMS: [&[i32]; 3] = [&[1], &[1], &[350, 2]];

/// All bundled stages in menu order.
pub fn bundled() -> Vec<LevelDefinition> {
    vec![
        LevelDefinition::new("Vault", &VAULT, &VAULT_PARAMS),
        LevelDefinition::new("Cliffs", &CLIFFS, &CLIFFS_PARAMS),
        LevelDefinition::new("Tower", &TOWER, &TOWER_PARAMS),
        LevelDefinition::new("Flooded Hall", &FLOODED_HALL, &FLOODED_HALL_PARAMS),
        LevelDefinition::new("Workshop", &WORKSHOP, &WORKSHOP_PARAMS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tuning;
    use crate::level::Level;

    #[test]
    fn test_every_bundled_stage_builds() {
        let tuning = Tuning::default();
        for stage in bundled() {
            let level = Level::new(&stage, &tuning);
            assert!(level.is_ok(), "{} failed: {:?}", stage.name, level.err());
        }
    }

    #[test]
    fn test_bundled_stages_have_one_player_marker() {
        for stage in bundled() {
            let players: usize = stage.rows.iter().map(|row| row.matches('P').count()).sum();
            assert_eq!(players, 1, "{}", stage.name);
        }
    }

    #[test]
    fn test_flooded_hall_contents() {
        let level = Level::new(&bundled()[3], &Tuning::default()).unwrap();
        assert_eq!(level.enemies().len(), 3);
        assert_eq!(level.water().len(), 21);
        assert_eq!(level.items().len(), 1);
    }
}
