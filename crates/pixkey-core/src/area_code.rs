//! # Brazilian Area Codes (DDD)
//!
//! The national numbering plan's two-digit area codes, compiled in as a
//! constant table. The table is fixed national data, not configuration.

/// Valid area codes with the state (UF) each one serves, grouped by state.
pub const AREA_CODES: &[(u8, &str)] = &[
    // São Paulo
    (11, "SP"),
    (12, "SP"),
    (13, "SP"),
    (14, "SP"),
    (15, "SP"),
    (16, "SP"),
    (17, "SP"),
    (18, "SP"),
    (19, "SP"),
    // Rio de Janeiro
    (21, "RJ"),
    (22, "RJ"),
    (24, "RJ"),
    // Espírito Santo
    (27, "ES"),
    (28, "ES"),
    // Minas Gerais
    (31, "MG"),
    (32, "MG"),
    (33, "MG"),
    (34, "MG"),
    (35, "MG"),
    (37, "MG"),
    (38, "MG"),
    // Paraná
    (41, "PR"),
    (42, "PR"),
    (43, "PR"),
    (44, "PR"),
    (45, "PR"),
    (46, "PR"),
    // Santa Catarina
    (47, "SC"),
    (48, "SC"),
    (49, "SC"),
    // Rio Grande do Sul
    (51, "RS"),
    (53, "RS"),
    (54, "RS"),
    (55, "RS"),
    // Distrito Federal
    (61, "DF"),
    // Goiás
    (62, "GO"),
    (64, "GO"),
    // Tocantins
    (63, "TO"),
    // Mato Grosso
    (65, "MT"),
    (66, "MT"),
    // Mato Grosso do Sul
    (67, "MS"),
    // Acre
    (68, "AC"),
    // Rondônia
    (69, "RO"),
    // Bahia
    (71, "BA"),
    (73, "BA"),
    (74, "BA"),
    (75, "BA"),
    (77, "BA"),
    // Sergipe
    (79, "SE"),
    // Pernambuco
    (81, "PE"),
    (87, "PE"),
    // Alagoas
    (82, "AL"),
    // Paraíba
    (83, "PB"),
    // Rio Grande do Norte
    (84, "RN"),
    // Ceará
    (85, "CE"),
    (88, "CE"),
    // Piauí
    (86, "PI"),
    (89, "PI"),
    // Pará
    (91, "PA"),
    (93, "PA"),
    (94, "PA"),
    // Amazonas
    (92, "AM"),
    (97, "AM"),
    // Roraima
    (95, "RR"),
    // Amapá
    (96, "AP"),
    // Maranhão
    (98, "MA"),
    (99, "MA"),
];

/// Whether `code` is a valid Brazilian area code.
pub fn is_valid(code: u8) -> bool {
    state_of(code).is_some()
}

/// The state (UF) served by `code`, if it is a valid area code.
pub fn state_of(code: u8) -> Option<&'static str> {
    AREA_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, uf)| *uf)
}

/// Parse the leading two ASCII digits of `digits` as an area code.
///
/// Returns `None` when fewer than two leading digits are present.
pub fn leading(digits: &str) -> Option<u8> {
    let bytes = digits.as_bytes();
    match bytes {
        [a, b, ..] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some((a - b'0') * 10 + (b - b'0'))
        }
        _ => None,
    }
}
