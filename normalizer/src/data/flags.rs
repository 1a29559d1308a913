use bitflags::bitflags;

bitflags! {
    /// значения свойств быстрой проверки кодпоинта (DerivedNormalizationProps: NF*_QC).
    /// отсутствие флагов - "да" для всех форм
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct QuickCheckFlags: u8
    {
        const NFD_NO = 1 << 0;
        const NFKD_NO = 1 << 1;
        const NFC_NO = 1 << 2;
        const NFC_MAYBE = 1 << 3;
        const NFKC_NO = 1 << 4;
        const NFKC_MAYBE = 1 << 5;
    }
}
