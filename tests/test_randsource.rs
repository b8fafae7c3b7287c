use rpwgen::randsource::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_on_host_with_os_entropy() {
        let source = SecureSource::probe().expect("OS random source should be available in tests");
        assert_eq!(source.kind(), SourceKind::Secure);
        assert_eq!(select_source().kind(), SourceKind::Secure);
    }

    #[test]
    fn test_select_falls_back_when_secure_source_unavailable() {
        let mut source = select_source_with(|| None);
        assert_eq!(source.kind(), SourceKind::Pseudo);
        // 回退源仍可正常取值
        let xs: Vec<u32> = (0..8).map(|_| source.next_u32()).collect();
        assert!(xs.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_select_uses_secure_source_when_probe_succeeds() {
        let source = select_source_with(SecureSource::probe);
        assert_eq!(source.kind(), SourceKind::Secure);
        let source = select_source_with(|| Some(SecureSource::default()));
        assert_eq!(source.kind(), SourceKind::Secure);
    }

    #[test]
    fn test_pseudo_source_seeded_stream() {
        let mut a = PseudoSource::from_seed(2024);
        let mut b = PseudoSource::from_seed(2024);
        let xs: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.kind(), SourceKind::Pseudo);
    }

    #[test]
    fn test_pseudo_source_from_environment_varies() {
        let mut source = PseudoSource::from_environment();
        let xs: Vec<u32> = (0..8).map(|_| source.next_u32()).collect();
        assert!(xs.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_source_kind_display() {
        assert_eq!(SourceKind::Secure.to_string(), "secure");
        assert_eq!(SourceKind::Pseudo.to_string(), "pseudo");
    }
}
