//! Static glyph-advance tables for the six standard PDF fonts the composer can draw with.
//!
//! Widths are in 1/1000 em (the Type 1 AFM convention), so a run of text at a given size
//! occupies `advance_width(text) / 1000 * font_size_pt` points. Characters are looked up
//! by their WinAnsi code, the same code the PDF backend draws them with: printable ASCII
//! 0x20..=0x7E in `widths`, 0x80..=0xFF in `upper_widths`. Only characters WinAnsi cannot
//! encode measure as `fallback_width`.

use serde::Serialize;

use crate::layout::winansi;

// ────────────────────────────────────────────────────────────────────────────
// Font enum
// ────────────────────────────────────────────────────────────────────────────

/// The closed set of fonts a composition can request.
///
/// Resolution from a user-supplied name is total: anything unrecognised becomes
/// [`StandardFont::Helvetica`], so a font choice never blocks document creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
    Courier,
    CourierBold,
}

impl StandardFont {
    /// Resolves a font name case-insensitively. Unknown names fall back to Helvetica.
    pub fn resolve(name: &str) -> StandardFont {
        match name.to_ascii_lowercase().as_str() {
            "helvetica" => StandardFont::Helvetica,
            "helvetica-bold" => StandardFont::HelveticaBold,
            "times-roman" => StandardFont::TimesRoman,
            "times-bold" => StandardFont::TimesBold,
            "courier" => StandardFont::Courier,
            "courier-bold" => StandardFont::CourierBold,
            _ => StandardFont::Helvetica,
        }
    }

    /// PostScript name used as the `/BaseFont` of the PDF font dictionary.
    pub fn base_font_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
        }
    }

    pub fn metrics(&self) -> &'static FontMetricTable {
        get_metrics(self)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static advance-width table for one standard font.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
///
/// `upper_widths[i]` is the glyph at WinAnsi code `0x80 + i`. The five codes WinAnsi
/// leaves unassigned (0x81, 0x8D, 0x8F, 0x90, 0x9D) hold the fallback width.
#[derive(Debug)]
pub struct FontMetricTable {
    pub font: StandardFont,
    widths: [u16; 95],
    upper_widths: [u16; 128],
    /// Width used for characters WinAnsi cannot encode.
    pub fallback_width: u16,
}

impl FontMetricTable {
    /// Advance width of `text` in 1/1000 em.
    pub fn advance_width(&self, text: &str) -> f32 {
        text.chars().map(|c| self.glyph_width(c) as f32).sum()
    }

    fn glyph_width(&self, c: char) -> u16 {
        match winansi::encode_char(c) {
            Some(code @ 0x20..=0x7E) => self.widths[(code - 0x20) as usize],
            Some(code @ 0x80..=0xFF) => self.upper_widths[(code - 0x80) as usize],
            _ => self.fallback_width,
        }
    }

    /// Rendered width of `text` in points at `font_size_pt`.
    pub fn text_width(&self, text: &str, font_size_pt: f32) -> f32 {
        self.advance_width(text) / 1000.0 * font_size_pt
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII + 128 WinAnsi upper-half glyphs each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    #[rustfmt::skip]
    upper_widths: [
        // €    -    ‚    ƒ    „    …     †    ‡    ˆ    ‰     Š    ‹    Œ     -    Ž    -
        556, 556, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 556, 611, 556,
        // -    ‘    ’    “    ”    •    –    —     ˜    ™     š    ›    œ    -    ž    Ÿ
        556, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 556, 500, 667,
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // À    Á    Â    Ã    Ä    Å    Æ     Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
    ],
    fallback_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::HelveticaBold,
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    #[rustfmt::skip]
    upper_widths: [
        // €    -    ‚    ƒ    „    …     †    ‡    ˆ    ‰     Š    ‹    Œ     -    Ž    -
        556, 556, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 556, 611, 556,
        // -    ‘    ’    “    ”    •    –    —     ˜    ™     š    ›    œ    -    ž    Ÿ
        556, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 556, 500, 667,
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // À    Á    Â    Ã    Ä    Å    Æ     Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
    ],
    fallback_width: 556,
};

static TIMES_ROMAN_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::TimesRoman,
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
        // 0    1    2    3    4    5    6    7    8    9
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        // :    ;    <    =    >    ?    @
        278, 278, 564, 564, 564, 444, 921,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 469, 500, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
        // {    |    }    ~
        480, 200, 480, 541,
    ],
    #[rustfmt::skip]
    upper_widths: [
        // €    -    ‚    ƒ    „    …     †    ‡    ˆ    ‰     Š    ‹    Œ     -    Ž    -
        500, 500, 333, 500, 444, 1000, 500, 500, 333, 1000, 556, 333, 889, 500, 611, 500,
        // -    ‘    ’    “    ”    •    –    —     ˜    ™     š    ›    œ    -    ž    Ÿ
        500, 333, 333, 444, 444, 350, 500, 1000, 333, 980, 389, 333, 722, 500, 444, 722,
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        250, 333, 500, 500, 500, 500, 200, 500, 333, 760, 276, 500, 564, 333, 760, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 564, 300, 300, 333, 500, 453, 250, 333, 300, 310, 500, 750, 750, 750, 444,
        // À    Á    Â    Ã    Ä    Å    Æ     Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        722, 722, 722, 722, 722, 722, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 722, 722, 722, 722, 722, 564, 722, 722, 722, 722, 722, 722, 556, 500,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        444, 444, 444, 444, 444, 444, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        500, 500, 500, 500, 500, 500, 500, 564, 500, 500, 500, 500, 500, 500, 500, 500,
    ],
    fallback_width: 500,
};

static TIMES_BOLD_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::TimesBold,
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %     &    '    (    )    *    +    ,    -    .    /
        250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
        // 0    1    2    3    4    5    6    7    8    9
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        // :    ;    <    =    >    ?    @
        333, 333, 570, 570, 570, 500, 930,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
        // N    O    P    Q    R    S    T    U    V    W     X    Y    Z
        722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
        // [    \    ]    ^    _    `
        333, 278, 333, 581, 500, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
        // {    |    }    ~
        394, 220, 394, 520,
    ],
    #[rustfmt::skip]
    upper_widths: [
        // €    -    ‚    ƒ    „    …     †    ‡    ˆ    ‰     Š    ‹    Œ     -    Ž    -
        500, 500, 333, 500, 500, 1000, 500, 500, 333, 1000, 556, 333, 1000, 500, 667, 500,
        // -    ‘    ’    “    ”    •    –    —     ˜    ™     š    ›    œ    -    ž    Ÿ
        500, 333, 333, 500, 500, 350, 500, 1000, 333, 1000, 389, 333, 722, 500, 444, 722,
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        250, 333, 500, 500, 500, 500, 220, 500, 333, 747, 300, 500, 570, 333, 747, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 570, 300, 300, 333, 556, 540, 250, 333, 300, 330, 500, 750, 750, 750, 500,
        // À    Á    Â    Ã    Ä    Å    Æ     Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 389, 389, 389, 389,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 778, 778, 778, 778, 778, 570, 778, 722, 722, 722, 722, 722, 611, 556,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        500, 500, 500, 500, 500, 500, 722, 444, 444, 444, 444, 444, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        500, 556, 500, 500, 500, 500, 500, 570, 500, 556, 556, 556, 556, 500, 556, 500,
    ],
    fallback_width: 500,
};

/// Courier and Courier-Bold are monospaced: every glyph advances 600.
static COURIER_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::Courier,
    widths: [600; 95],
    upper_widths: [600; 128],
    fallback_width: 600,
};

static COURIER_BOLD_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::CourierBold,
    widths: [600; 95],
    upper_widths: [600; 128],
    fallback_width: 600,
};

/// Returns the static metric table for a given font.
pub fn get_metrics(font: &StandardFont) -> &'static FontMetricTable {
    match font {
        StandardFont::Helvetica => &HELVETICA_TABLE,
        StandardFont::HelveticaBold => &HELVETICA_BOLD_TABLE,
        StandardFont::TimesRoman => &TIMES_ROMAN_TABLE,
        StandardFont::TimesBold => &TIMES_BOLD_TABLE,
        StandardFont::Courier => &COURIER_TABLE,
        StandardFont::CourierBold => &COURIER_BOLD_TABLE,
    }
}

/// Resolves a font name straight to its metric table.
pub fn resolve(font_name: &str) -> &'static FontMetricTable {
    StandardFont::resolve(font_name).metrics()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FONTS: [StandardFont; 6] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::TimesRoman,
        StandardFont::TimesBold,
        StandardFont::Courier,
        StandardFont::CourierBold,
    ];

    #[test]
    fn test_resolve_known_names_case_insensitive() {
        assert_eq!(StandardFont::resolve("Helvetica"), StandardFont::Helvetica);
        assert_eq!(StandardFont::resolve("HELVETICA-BOLD"), StandardFont::HelveticaBold);
        assert_eq!(StandardFont::resolve("Times-Roman"), StandardFont::TimesRoman);
        assert_eq!(StandardFont::resolve("times-bold"), StandardFont::TimesBold);
        assert_eq!(StandardFont::resolve("Courier"), StandardFont::Courier);
        assert_eq!(StandardFont::resolve("courier-BOLD"), StandardFont::CourierBold);
    }

    #[test]
    fn test_unknown_font_resolves_to_helvetica() {
        let comic = resolve("Comic Sans");
        let helvetica = resolve("helvetica");
        assert_eq!(comic.font, StandardFont::Helvetica);
        assert!(std::ptr::eq(comic, helvetica));
        assert_eq!(StandardFont::resolve(""), StandardFont::Helvetica);
        // Close-but-not-exact names are not special-cased.
        assert_eq!(StandardFont::resolve("Times"), StandardFont::Helvetica);
    }

    #[test]
    fn test_each_table_reports_its_own_font() {
        for font in ALL_FONTS {
            assert_eq!(font.metrics().font, font);
        }
    }

    #[test]
    fn test_advance_width_empty_is_zero() {
        assert_eq!(resolve("helvetica").advance_width(""), 0.0);
    }

    #[test]
    fn test_advance_width_helvetica_words() {
        let metrics = resolve("helvetica");
        // a(556) l(222) p(556) h(556) a(556)
        assert_eq!(metrics.advance_width("alpha"), 2446.0);
        assert_eq!(metrics.advance_width(" "), 278.0);
        assert_eq!(metrics.advance_width("alpha beta"), 4670.0);
    }

    #[test]
    fn test_text_width_scales_with_font_size() {
        let metrics = resolve("helvetica");
        let width = metrics.text_width("alpha beta", 12.0);
        assert!((width - 56.04).abs() < 1e-3, "expected 56.04pt, got {width}");
        let doubled = metrics.text_width("alpha beta", 24.0);
        assert!((doubled - 2.0 * width).abs() < 1e-3);
    }

    #[test]
    fn test_courier_is_monospaced() {
        let metrics = resolve("courier");
        assert_eq!(metrics.advance_width("iiii"), metrics.advance_width("WWWW"));
        assert_eq!(metrics.advance_width("abc"), 1800.0);
    }

    #[test]
    fn test_winansi_specials_use_their_own_widths() {
        // emdash, ellipsis, bullet
        assert_eq!(resolve("helvetica").advance_width("—…•"), 2350.0);
        assert_eq!(resolve("helvetica-bold").advance_width("—…•"), 2350.0);
        // quotedblleft, quotedblright, trademark
        assert_eq!(resolve("times-roman").advance_width("“”™"), 1868.0);
        assert_eq!(resolve("times-bold").advance_width("“”™"), 2000.0);
        assert_eq!(resolve("courier").advance_width("—…"), 1200.0);
    }

    #[test]
    fn test_latin1_letters_use_their_own_widths() {
        assert_eq!(resolve("helvetica").advance_width("é"), 556.0);
        assert_eq!(resolve("helvetica-bold").advance_width("ñ"), 611.0);
        assert_eq!(resolve("times-roman").advance_width("é"), 444.0);
        assert_eq!(resolve("times-bold").advance_width("Æ"), 1000.0);
        assert_eq!(resolve("courier-bold").advance_width("ß"), 600.0);
        // Accented letters measure like their base letters in these fonts.
        let times = resolve("times-roman");
        assert_eq!(times.advance_width("café"), times.advance_width("cafe"));
    }

    #[test]
    fn test_only_unencodable_characters_use_fallback_width() {
        let metrics = resolve("times-roman");
        assert_eq!(metrics.advance_width("日"), metrics.fallback_width as f32);
        assert_ne!(metrics.advance_width("—"), metrics.fallback_width as f32);
    }

    #[test]
    fn test_every_encodable_glyph_has_a_width() {
        for font in ALL_FONTS {
            let metrics = font.metrics();
            for code in (0x20u32..=0x7E).chain(0xA0..=0xFF) {
                let c = char::from_u32(code).unwrap();
                assert!(metrics.advance_width(&c.to_string()) > 0.0, "{font:?} {c:?}");
            }
        }
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "The quick brown fox jumps over the lazy dog";
        assert!(resolve("helvetica-bold").advance_width(text) > resolve("helvetica").advance_width(text));
        assert!(resolve("times-bold").advance_width(text) > resolve("times-roman").advance_width(text));
    }

    #[test]
    fn test_base_font_names_round_trip_through_resolve() {
        for font in ALL_FONTS {
            assert_eq!(StandardFont::resolve(font.base_font_name()), font);
        }
    }
}
