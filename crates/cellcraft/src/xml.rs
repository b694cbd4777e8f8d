//! Reading and writing mirrors as XML fragments

use cellcraft_core::{
    Palette, Result, SlAlignment, SlBorder, SlColor, SlDifferentialFormat, SlFill, SlFont,
    SlNumberingFormat, SlProtection, SlSparklineGroup, SlTable,
};
use cellcraft_ooxml::{
    Alignment, Border, Color, DifferentialFormat, Fill, Font, NumberingFormat, Protection,
    SparklineGroup, Table, XmlPart,
};

/// Extension trait tying a mirror to the element it reads and writes
///
/// Mirrors that hold colors resolve them against the palette passed to
/// [`from_xml`](MirrorXmlExt::from_xml); the others ignore it.
pub trait MirrorXmlExt: Sized {
    type Element: XmlPart;

    fn element(&self) -> Self::Element;

    fn from_part(element: &Self::Element, palette: &Palette) -> Self;

    /// Serialize to an XML fragment
    fn to_xml(&self) -> Result<String> {
        Ok(self.element().to_xml()?)
    }

    /// Read from an XML fragment
    fn from_xml(xml: &str, palette: &Palette) -> Result<Self> {
        let element = Self::Element::from_xml(xml)?;
        Ok(Self::from_part(&element, palette))
    }
}

macro_rules! mirror_xml {
    (palette: $($mirror:ty => $element:ty),+ $(,)?) => {
        $(
            impl MirrorXmlExt for $mirror {
                type Element = $element;

                fn element(&self) -> $element {
                    self.to_element()
                }

                fn from_part(element: &$element, palette: &Palette) -> Self {
                    <$mirror>::from_element(element, palette)
                }
            }
        )+
    };
    (plain: $($mirror:ty => $element:ty),+ $(,)?) => {
        $(
            impl MirrorXmlExt for $mirror {
                type Element = $element;

                fn element(&self) -> $element {
                    self.to_element()
                }

                fn from_part(element: &$element, _palette: &Palette) -> Self {
                    <$mirror>::from_element(element)
                }
            }
        )+
    };
}

mirror_xml!(palette:
    SlColor => Color,
    SlFont => Font,
    SlFill => Fill,
    SlBorder => Border,
    SlDifferentialFormat => DifferentialFormat,
    SlSparklineGroup => SparklineGroup,
);

mirror_xml!(plain:
    SlAlignment => Alignment,
    SlProtection => Protection,
    SlNumberingFormat => NumberingFormat,
    SlTable => Table,
);
