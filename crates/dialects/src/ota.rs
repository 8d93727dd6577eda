//! OTA provisioning documents.
//!
//! Two vocabularies share the `text/vnd.wap.connectivity-xml` content type:
//! the Nokia/Ericsson OTA settings format and the OMA provisioning content
//! format. Documents declaring the OMA DTD get the OMA tables; everything
//! else is compiled as Nokia OTA. Both match names and values without
//! regard to case, and tokenize whole values only.

use wapgate_wbxml::{
    AttributeEntry, DialectConfig, TableSwitch, TextPolicy, TokenEntry, ValueMatch,
};

pub const OMA_PUBLIC_ID: &str = "-//WAPFORUM//DTD PROV 1.0//EN";

/// Element token that turns on the SYNCSETTINGS vocabulary.
pub const SYNCSETTINGS: u8 = 0x15;
/// Start token written in front of a tokenized OMA `VALUE`.
pub const OMA_VALUE_START: u8 = 0x06;

pub const ELEMENTS: &[TokenEntry] = &[
    TokenEntry::new("SYNCSETTINGS", SYNCSETTINGS),
    TokenEntry::new("WAP-PROVISIONINGDOC", 0x05),
    TokenEntry::new("CHARACTERISTIC-LIST", 0x05),
    TokenEntry::new("CHARACTERISTIC", 0x06),
    TokenEntry::new("PARM", 0x07),
];

/// Elements inside a SYNCSETTINGS document (content bit added by the
/// compiler).
pub const SYNCSETTINGS_ELEMENTS: &[TokenEntry] = &[
    TokenEntry::new("Addr", 0x05),
    TokenEntry::new("AddrType", 0x06),
    TokenEntry::new("Auth", 0x07),
    TokenEntry::new("AuthLevel", 0x08),
    TokenEntry::new("AuthScheme", 0x09),
    TokenEntry::new("Bearer", 0x0A),
    TokenEntry::new("ConRef", 0x0B),
    TokenEntry::new("ConType", 0x0C),
    TokenEntry::new("Cred", 0x0D),
    TokenEntry::new("CTType", 0x0E),
    TokenEntry::new("CTVer", 0x0F),
    TokenEntry::new("HostAddr", 0x10),
    TokenEntry::new("Name", 0x11),
    TokenEntry::new("Port", 0x12),
    TokenEntry::new("RefID", 0x13),
    TokenEntry::new("RemoteDB", 0x14),
    TokenEntry::new("URI", 0x16),
    TokenEntry::new("Username", 0x17),
    TokenEntry::new("Version", 0x18),
];

pub const NOKIA_ATTRIBUTES: &[AttributeEntry] = &[
    AttributeEntry::new("TYPE", Some("ADDRESS"), 0x06),
    AttributeEntry::new("TYPE", Some("URL"), 0x07),
    AttributeEntry::new("TYPE", Some("MMSURL"), 0x7C),
    AttributeEntry::new("TYPE", Some("NAME"), 0x08),
    AttributeEntry::new("TYPE", Some("ID"), 0x7D),
    AttributeEntry::new("TYPE", Some("BOOKMARK"), 0x7F),
    AttributeEntry::new("NAME", Some("BEARER"), 0x12),
    AttributeEntry::new("NAME", Some("PROXY"), 0x13),
    AttributeEntry::new("NAME", Some("PORT"), 0x14),
    AttributeEntry::new("NAME", Some("NAME"), 0x15),
    AttributeEntry::new("NAME", Some("PROXY_TYPE"), 0x16),
    AttributeEntry::new("NAME", Some("URL"), 0x17),
    AttributeEntry::new("NAME", Some("PROXY_AUTHNAME"), 0x18),
    AttributeEntry::new("NAME", Some("PROXY_AUTHSECRET"), 0x19),
    AttributeEntry::new("NAME", Some("SMS_SMSC_ADDRESS"), 0x1A),
    AttributeEntry::new("NAME", Some("USSD_SERVICE_CODE"), 0x1B),
    AttributeEntry::new("NAME", Some("GPRS_ACCESSPOINTNAME"), 0x1C),
    AttributeEntry::new("NAME", Some("PPP_LOGINTYPE"), 0x1D),
    AttributeEntry::new("NAME", Some("PROXY_LOGINTYPE"), 0x1E),
    AttributeEntry::new("NAME", Some("CSD_DIALSTRING"), 0x21),
    AttributeEntry::new("NAME", Some("CSD_CALLTYPE"), 0x28),
    AttributeEntry::new("NAME", Some("CSD_CALLSPEED"), 0x29),
    AttributeEntry::new("NAME", Some("PPP_AUTHTYPE"), 0x22),
    AttributeEntry::new("NAME", Some("PPP_AUTHNAME"), 0x23),
    AttributeEntry::new("NAME", Some("PPP_AUTHSECRET"), 0x24),
    AttributeEntry::new("NAME", Some("ISP_NAME"), 0x7E),
    AttributeEntry::new("NAME", None, 0x10),
    AttributeEntry::new("VALUE", Some("GSM/CSD"), 0x45),
    AttributeEntry::new("VALUE", Some("GSM/SMS"), 0x46),
    AttributeEntry::new("VALUE", Some("GSM/USSD"), 0x47),
    AttributeEntry::new("VALUE", Some("IS-136/CSD"), 0x48),
    AttributeEntry::new("VALUE", Some("GPRS"), 0x49),
    AttributeEntry::new("VALUE", Some("9200"), 0x60),
    AttributeEntry::new("VALUE", Some("9201"), 0x61),
    AttributeEntry::new("VALUE", Some("9202"), 0x62),
    AttributeEntry::new("VALUE", Some("9203"), 0x63),
    AttributeEntry::new("VALUE", Some("AUTOMATIC"), 0x64),
    AttributeEntry::new("VALUE", Some("MANUAL"), 0x65),
    AttributeEntry::new("VALUE", Some("AUTO"), 0x6A),
    AttributeEntry::new("VALUE", Some("9600"), 0x6B),
    AttributeEntry::new("VALUE", Some("14400"), 0x6C),
    AttributeEntry::new("VALUE", Some("19200"), 0x6D),
    AttributeEntry::new("VALUE", Some("28800"), 0x6E),
    AttributeEntry::new("VALUE", Some("38400"), 0x6F),
    AttributeEntry::new("VALUE", Some("PAP"), 0x70),
    AttributeEntry::new("VALUE", Some("CHAP"), 0x71),
    AttributeEntry::new("VALUE", Some("ANALOGUE"), 0x72),
    AttributeEntry::new("VALUE", Some("ISDN"), 0x73),
    AttributeEntry::new("VALUE", Some("43200"), 0x74),
    AttributeEntry::new("VALUE", Some("57600"), 0x75),
    AttributeEntry::new("VALUE", Some("MSISDN_NO"), 0x76),
    AttributeEntry::new("VALUE", Some("IPV4"), 0x77),
    AttributeEntry::new("VALUE", Some("MS_CHAP"), 0x78),
    AttributeEntry::new("VALUE", None, 0x11),
];

pub const OMA_ATTRIBUTES: &[AttributeEntry] = &[
    AttributeEntry::new("VERSION", Some("1.0"), 0x46),
    AttributeEntry::new("VERSION", None, 0x45),
    AttributeEntry::new("TYPE", Some("PXLOGICAL"), 0x51),
    AttributeEntry::new("TYPE", Some("PXPHYSICAL"), 0x52),
    AttributeEntry::new("TYPE", Some("PORT"), 0x53),
    AttributeEntry::new("TYPE", Some("VALIDITY"), 0x54),
    AttributeEntry::new("TYPE", Some("NAPDEF"), 0x55),
    AttributeEntry::new("TYPE", Some("BOOTSTRAP"), 0x56),
    AttributeEntry::new("TYPE", Some("VENDORCONFIG"), 0x57),
    AttributeEntry::new("TYPE", Some("PXAUTHINFO"), 0x59),
    AttributeEntry::new("TYPE", Some("NAPAUTHINFO"), 0x5A),
    AttributeEntry::new("TYPE", Some("ACCESS"), 0x5B),
    AttributeEntry::new("TYPE", Some("BEARERINFO"), 0x5C),
    AttributeEntry::new("TYPE", Some("DNS-ADDRINFO"), 0x5D),
    AttributeEntry::new("TYPE", Some("CLIENTIDENTITY"), 0x58),
    AttributeEntry::new("TYPE", Some("APPLICATION"), 0x55).on_page(1),
    AttributeEntry::new("TYPE", Some("APPADDR"), 0x56).on_page(1),
    AttributeEntry::new("TYPE", Some("APPAUTH"), 0x57).on_page(1),
    AttributeEntry::new("TYPE", Some("RESOURCE"), 0x59).on_page(1),
    AttributeEntry::new("TYPE", Some("WLAN"), 0x5A).on_page(1),
    AttributeEntry::new("TYPE", Some("SEC-SSID"), 0x5B).on_page(1),
    AttributeEntry::new("TYPE", Some("EAP"), 0x5C).on_page(1),
    AttributeEntry::new("TYPE", Some("CERT"), 0x5D).on_page(1),
    AttributeEntry::new("TYPE", Some("WEPKEY"), 0x5E).on_page(1),
    AttributeEntry::new("TYPE", None, 0x50),
    AttributeEntry::new("NAME", Some("NAME"), 0x07),
    AttributeEntry::new("NAME", Some("NAP-ADDRESS"), 0x08),
    AttributeEntry::new("NAME", Some("NAP-ADDRTYPE"), 0x09),
    AttributeEntry::new("NAME", Some("CALLTYPE"), 0x0A),
    AttributeEntry::new("NAME", Some("VALIDUNTIL"), 0x0B),
    AttributeEntry::new("NAME", Some("AUTHTYPE"), 0x0C),
    AttributeEntry::new("NAME", Some("AUTHNAME"), 0x0D),
    AttributeEntry::new("NAME", Some("AUTHSECRET"), 0x0E),
    AttributeEntry::new("NAME", Some("LINGER"), 0x0F),
    AttributeEntry::new("NAME", Some("BEARER"), 0x10),
    AttributeEntry::new("NAME", Some("NAPID"), 0x11),
    AttributeEntry::new("NAME", Some("COUNTRY"), 0x12),
    AttributeEntry::new("NAME", Some("NETWORK"), 0x13),
    AttributeEntry::new("NAME", Some("INTERNET"), 0x14),
    AttributeEntry::new("NAME", Some("PROXY-ID"), 0x15),
    AttributeEntry::new("NAME", Some("PROXY-PROVIDER-ID"), 0x16),
    AttributeEntry::new("NAME", Some("DOMAIN"), 0x17),
    AttributeEntry::new("NAME", Some("PROVURL"), 0x18),
    AttributeEntry::new("NAME", Some("PXAUTH-TYPE"), 0x19),
    AttributeEntry::new("NAME", Some("PXAUTH-ID"), 0x1A),
    AttributeEntry::new("NAME", Some("PXAUTH-PW"), 0x1B),
    AttributeEntry::new("NAME", Some("STARTPAGE"), 0x1C),
    AttributeEntry::new("NAME", Some("BASAUTH-ID"), 0x1D),
    AttributeEntry::new("NAME", Some("BASAUTH-PW"), 0x1E),
    AttributeEntry::new("NAME", Some("PUSHENABLED"), 0x1F),
    AttributeEntry::new("NAME", Some("PXADDR"), 0x20),
    AttributeEntry::new("NAME", Some("PXADDRTYPE"), 0x21),
    AttributeEntry::new("NAME", Some("TO-NAPID"), 0x22),
    AttributeEntry::new("NAME", Some("PORTNBR"), 0x23),
    AttributeEntry::new("NAME", Some("SERVICE"), 0x24),
    AttributeEntry::new("NAME", Some("LINKSPEED"), 0x25),
    AttributeEntry::new("NAME", Some("DNLINKSPEED"), 0x26),
    AttributeEntry::new("NAME", Some("LOCAL-ADDR"), 0x27),
    AttributeEntry::new("NAME", Some("LOCAL-ADDRTYPE"), 0x28),
    AttributeEntry::new("NAME", Some("CONTEXT-ALLOW"), 0x29),
    AttributeEntry::new("NAME", Some("TRUST"), 0x2A),
    AttributeEntry::new("NAME", Some("MASTER"), 0x2B),
    AttributeEntry::new("NAME", Some("SID"), 0x2C),
    AttributeEntry::new("NAME", Some("SOC"), 0x2D),
    AttributeEntry::new("NAME", Some("WSP-VERSION"), 0x2E),
    AttributeEntry::new("NAME", Some("PHYSICAL-PROXY-ID"), 0x2F),
    AttributeEntry::new("NAME", Some("CLIENT-ID"), 0x30),
    AttributeEntry::new("NAME", Some("DELIVERY-ERR-SDU"), 0x31),
    AttributeEntry::new("NAME", Some("DELIVERY-ORDER"), 0x32),
    AttributeEntry::new("NAME", Some("TRAFFIC-CLASS"), 0x33),
    AttributeEntry::new("NAME", Some("MAX-SDU-SIZE"), 0x34),
    AttributeEntry::new("NAME", Some("MAX-BITRATE-UPLINK"), 0x35),
    AttributeEntry::new("NAME", Some("MAX-BITRATE-DNLINK"), 0x36),
    AttributeEntry::new("NAME", Some("RESIDUAL-BER"), 0x37),
    AttributeEntry::new("NAME", Some("SDU-ERROR-RATIO"), 0x38),
    AttributeEntry::new("NAME", Some("TRAFFIC-HANDL-PRIO"), 0x39),
    AttributeEntry::new("NAME", Some("TRANSFER-DELAY"), 0x3A),
    AttributeEntry::new("NAME", Some("GUARANTEED-BITRATE-UPLINK"), 0x3B),
    AttributeEntry::new("NAME", Some("GUARANTEED-BITRATE-DNLINK"), 0x3C),
    AttributeEntry::new("NAME", Some("PXADDR-FQDN"), 0x3D),
    AttributeEntry::new("NAME", Some("PROXY-PW"), 0x3E),
    AttributeEntry::new("NAME", Some("PPGAUTH-TYPE"), 0x3F),
    AttributeEntry::new("NAME", Some("PULLENABLED"), 0x47),
    AttributeEntry::new("NAME", Some("DNS-ADDR"), 0x48),
    AttributeEntry::new("NAME", Some("MAX-NUM-RETRY"), 0x49),
    AttributeEntry::new("NAME", Some("FIRST-RETRY-TIMEOUT"), 0x4A),
    AttributeEntry::new("NAME", Some("REREG-THRESHOLD"), 0x4B),
    AttributeEntry::new("NAME", Some("T-BIT"), 0x4C),
    AttributeEntry::new("NAME", Some("AUTH-ENTITY"), 0x4E),
    AttributeEntry::new("NAME", Some("SPI"), 0x4F),
    AttributeEntry::new("NAME", Some("AACCEPT"), 0x2E).on_page(1),
    AttributeEntry::new("NAME", Some("AAUTHDATA"), 0x2F).on_page(1),
    AttributeEntry::new("NAME", Some("AAUTHLEVEL"), 0x30).on_page(1),
    AttributeEntry::new("NAME", Some("AAUTHNAME"), 0x31).on_page(1),
    AttributeEntry::new("NAME", Some("AAUTHSECRET"), 0x32).on_page(1),
    AttributeEntry::new("NAME", Some("AAUTHTYPE"), 0x33).on_page(1),
    AttributeEntry::new("NAME", Some("ADDR"), 0x34).on_page(1),
    AttributeEntry::new("NAME", Some("ADDRTYPE"), 0x35).on_page(1),
    AttributeEntry::new("NAME", Some("APPID"), 0x36).on_page(1),
    AttributeEntry::new("NAME", Some("APROTOCOL"), 0x37).on_page(1),
    AttributeEntry::new("NAME", Some("PROVIDER-ID"), 0x38).on_page(1),
    AttributeEntry::new("NAME", Some("TO-PROXY"), 0x39).on_page(1),
    AttributeEntry::new("NAME", Some("URI"), 0x3A).on_page(1),
    AttributeEntry::new("NAME", Some("RULE"), 0x3B).on_page(1),
    AttributeEntry::new("NAME", Some("APPREF"), 0x3C).on_page(1),
    AttributeEntry::new("NAME", Some("TO-APPREF"), 0x3D).on_page(1),
    AttributeEntry::new("NAME", Some("PRI-SSID"), 0x3E).on_page(1),
    AttributeEntry::new("NAME", Some("PRI-U-SSID"), 0x3F).on_page(1),
    AttributeEntry::new("NAME", Some("PRI-H-SSID"), 0x40).on_page(1),
    AttributeEntry::new("NAME", Some("S-SSID"), 0x41).on_page(1),
    AttributeEntry::new("NAME", Some("S-U-SSID"), 0x42).on_page(1),
    AttributeEntry::new("NAME", Some("NETMODE"), 0x43).on_page(1),
    AttributeEntry::new("NAME", Some("SECMODE"), 0x44).on_page(1),
    AttributeEntry::new("NAME", Some("EAPTYPE"), 0x45).on_page(1),
    AttributeEntry::new("NAME", Some("USERNAME"), 0x46).on_page(1),
    AttributeEntry::new("NAME", Some("PASSWORD"), 0x47).on_page(1),
    AttributeEntry::new("NAME", Some("REALM"), 0x48).on_page(1),
    AttributeEntry::new("NAME", Some("USE-PSEUD"), 0x49).on_page(1),
    AttributeEntry::new("NAME", Some("ENCAPS"), 0x5B).on_page(1),
    AttributeEntry::new("NAME", Some("VER-SER-REALM"), 0x4C).on_page(1),
    AttributeEntry::new("NAME", Some("CLIENT-AUTH"), 0x4D).on_page(1),
    AttributeEntry::new("NAME", Some("SES-VAL-TIME"), 0x4E).on_page(1),
    AttributeEntry::new("NAME", Some("CIP-SUIT"), 0x4F).on_page(1),
    AttributeEntry::new("NAME", Some("PEAP-V0"), 0x60).on_page(1),
    AttributeEntry::new("NAME", Some("PEAP-V1"), 0x61).on_page(1),
    AttributeEntry::new("NAME", Some("PEAP-V2"), 0x62).on_page(1),
    AttributeEntry::new("NAME", Some("ISS-NAME"), 0x63).on_page(1),
    AttributeEntry::new("NAME", Some("SUB-NAME"), 0x64).on_page(1),
    AttributeEntry::new("NAME", Some("CERT-TYPE"), 0x65).on_page(1),
    AttributeEntry::new("NAME", Some("SER-NUM"), 0x66).on_page(1),
    AttributeEntry::new("NAME", Some("SUB-KEY-ID"), 0x67).on_page(1),
    AttributeEntry::new("NAME", Some("THUMBPRINT"), 0x68).on_page(1),
    AttributeEntry::new("NAME", Some("WPA-PRES-KEY-ASC"), 0x69).on_page(1),
    AttributeEntry::new("NAME", Some("WPA-PRES-KEY-HEX"), 0x6A).on_page(1),
    AttributeEntry::new("NAME", Some("WEPKEYIND"), 0x6B).on_page(1),
    AttributeEntry::new("NAME", Some("WEPAUTHMODE"), 0x6C).on_page(1),
    AttributeEntry::new("NAME", Some("LENGTH"), 0x6D).on_page(1),
    AttributeEntry::new("NAME", Some("INDEX"), 0x6E).on_page(1),
    AttributeEntry::new("NAME", Some("DATA"), 0x6F).on_page(1),
    AttributeEntry::new("NAME", Some("WLANHAND"), 0x70).on_page(1),
    AttributeEntry::new("NAME", Some("EDIT-SET"), 0x71).on_page(1),
    AttributeEntry::new("NAME", Some("VIEW-SET"), 0x72).on_page(1),
    AttributeEntry::new("NAME", Some("FORW-SET"), 0x73).on_page(1),
    AttributeEntry::new("NAME", None, 0x05),
    AttributeEntry::new("VALUE", Some("IPV4"), 0x85),
    AttributeEntry::new("VALUE", Some("IPV6"), 0x86),
    AttributeEntry::new("VALUE", Some("E164"), 0x87),
    AttributeEntry::new("VALUE", Some("ALPHA"), 0x88),
    AttributeEntry::new("VALUE", Some("APN"), 0x89),
    AttributeEntry::new("VALUE", Some("SCODE"), 0x8A),
    AttributeEntry::new("VALUE", Some("TETRA-ITSI"), 0x8B),
    AttributeEntry::new("VALUE", Some("MAN"), 0x8C),
    AttributeEntry::new("VALUE", Some("APPSRV"), 0x8D).on_page(1),
    AttributeEntry::new("VALUE", Some("OBEX"), 0x8E).on_page(1),
    AttributeEntry::new("VALUE", Some("ANALOG-MODEM"), 0x90),
    AttributeEntry::new("VALUE", Some("V.120"), 0x91),
    AttributeEntry::new("VALUE", Some("V.110"), 0x92),
    AttributeEntry::new("VALUE", Some("X.31"), 0x93),
    AttributeEntry::new("VALUE", Some("BIT-TRANSPARENT"), 0x94),
    AttributeEntry::new("VALUE", Some("DIRECT-ASYNCHRONOUS-DATA-SERVICE"), 0x95),
    AttributeEntry::new("VALUE", Some("PAP"), 0x9A),
    AttributeEntry::new("VALUE", Some("CHAP"), 0x9B),
    AttributeEntry::new("VALUE", Some("HTTP-BASIC"), 0x9C),
    AttributeEntry::new("VALUE", Some("HTTP-DIGEST"), 0x9D),
    AttributeEntry::new("VALUE", Some("WTLS-SS"), 0x9E),
    AttributeEntry::new("VALUE", Some("MD5"), 0x9F),
    AttributeEntry::new("VALUE", Some("GSM-USSD"), 0xA2),
    AttributeEntry::new("VALUE", Some("GSM-SMS"), 0xA3),
    AttributeEntry::new("VALUE", Some("ANSI-136-GUTS"), 0xA4),
    AttributeEntry::new("VALUE", Some("IS-95-CDMA-SMS"), 0xA5),
    AttributeEntry::new("VALUE", Some("IS-95-CDMA-CSD"), 0xA6),
    AttributeEntry::new("VALUE", Some("IS-95-CDMA-PACKET"), 0xA7),
    AttributeEntry::new("VALUE", Some("ANSI-136-CSD"), 0xA8),
    AttributeEntry::new("VALUE", Some("ANSI-136-GPRS"), 0xA9),
    AttributeEntry::new("VALUE", Some("GSM-CSD"), 0xAA),
    AttributeEntry::new("VALUE", Some("GSM-GPRS"), 0xAB),
    AttributeEntry::new("VALUE", Some("AMPS-CDPD"), 0xAC),
    AttributeEntry::new("VALUE", Some("PDC-CSD"), 0xAD),
    AttributeEntry::new("VALUE", Some("PDC-PACKET"), 0xAE),
    AttributeEntry::new("VALUE", Some("IDEN-SMS"), 0xAF),
    AttributeEntry::new("VALUE", Some("IDEN-CSD"), 0xB0),
    AttributeEntry::new("VALUE", Some("IDEN-PACKET"), 0xB1),
    AttributeEntry::new("VALUE", Some("FLEX/REFLEX"), 0xB2),
    AttributeEntry::new("VALUE", Some("PHS-SMS"), 0xB3),
    AttributeEntry::new("VALUE", Some("PHS-CSD"), 0xB4),
    AttributeEntry::new("VALUE", Some("TETRA-SDS"), 0xB5),
    AttributeEntry::new("VALUE", Some("TETRA-PACKET"), 0xB6),
    AttributeEntry::new("VALUE", Some("ANSI-136-GHOST"), 0xB7),
    AttributeEntry::new("VALUE", Some("MOBITEX-MPAK"), 0xB8),
    AttributeEntry::new("VALUE", Some("CDMA2000-1X-SIMPLE-IP"), 0xB9),
    AttributeEntry::new("VALUE", Some("CDMA2000-1X-MOBILE-IP"), 0xBA),
    AttributeEntry::new("VALUE", Some("3G-GSM"), 0xBB),
    AttributeEntry::new("VALUE", Some("WLAN"), 0xBC),
    AttributeEntry::new("VALUE", Some("AUTOBAUDING"), 0xC5),
    AttributeEntry::new("VALUE", Some("CL-WSP"), 0xCA),
    AttributeEntry::new("VALUE", Some("CO-WSP"), 0xCB),
    AttributeEntry::new("VALUE", Some("CL-SEC-WSP"), 0xCC),
    AttributeEntry::new("VALUE", Some("CO-SEC-WSP"), 0xCD),
    AttributeEntry::new("VALUE", Some("CL-SEC-WTA"), 0xCE),
    AttributeEntry::new("VALUE", Some("CO-SEC-WTA"), 0xCF),
    AttributeEntry::new("VALUE", Some("OTA-HTTP-TO"), 0xD0),
    AttributeEntry::new("VALUE", Some("OTA-HTTP-TLS-TO"), 0xD1),
    AttributeEntry::new("VALUE", Some("OTA-HTTP-PO"), 0xD2),
    AttributeEntry::new("VALUE", Some("OTA-HTTP-TLS-PO"), 0xD3),
    AttributeEntry::new("VALUE", Some(","), 0x90).on_page(1),
    AttributeEntry::new("VALUE", Some("HTTP-"), 0x91).on_page(1),
    AttributeEntry::new("VALUE", Some("BASIC"), 0x92).on_page(1),
    AttributeEntry::new("VALUE", Some("DIGEST"), 0x93).on_page(1),
    AttributeEntry::new("VALUE", Some("AAA"), 0xE0),
    AttributeEntry::new("VALUE", Some("HA"), 0xE1),
    AttributeEntry::new("VALUE", None, 0x06),
];

/// Nokia/Ericsson OTA settings: WBXML 1.1, unknown public id.
pub fn nokia_config() -> DialectConfig {
    DialectConfig::new("OTA", ELEMENTS, NOKIA_ATTRIBUTES)
        .with_header(0x01, 0x01)
        .with_case_insensitive_names()
        .with_value_match(ValueMatch::Whole)
        .with_text_policy(TextPolicy::Ignore)
        .without_cdata()
        .with_table_switch(TableSwitch {
            trigger: SYNCSETTINGS,
            elements: SYNCSETTINGS_ELEMENTS,
            text: TextPolicy::default(),
        })
}

/// OMA provisioning content: WBXML 1.3, PROV 1.0 public id.
pub fn oma_config() -> DialectConfig {
    DialectConfig::new("OMA provisioning", ELEMENTS, OMA_ATTRIBUTES)
        .with_header(0x03, 0x0B)
        .with_case_insensitive_names()
        .with_value_match(ValueMatch::Whole)
        .with_text_policy(TextPolicy::Ignore)
        .without_cdata()
        .with_value_attribute("VALUE", OMA_VALUE_START)
}

/// True when the DOCTYPE public identifier selects the OMA vocabulary.
pub fn is_oma(public_id: Option<&str>) -> bool {
    public_id == Some(OMA_PUBLIC_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_inline_entries_last(table: &[AttributeEntry]) {
        for (i, entry) in table.iter().enumerate() {
            if entry.value_prefix.is_none() {
                assert!(
                    table[i + 1..].iter().all(|later| later.name != entry.name),
                    "INLINE entry for {} is shadowing later entries",
                    entry.name
                );
            }
        }
    }

    #[test]
    fn inline_entries_close_their_groups() {
        assert_inline_entries_last(NOKIA_ATTRIBUTES);
        assert_inline_entries_last(OMA_ATTRIBUTES);
    }

    #[test]
    fn oma_selection_follows_doctype() {
        assert!(is_oma(Some("-//WAPFORUM//DTD PROV 1.0//EN")));
        assert!(!is_oma(Some("-//WAPFORUM//DTD WML 1.1//EN")));
        assert!(!is_oma(None));
    }

    #[test]
    fn oma_has_second_code_page() {
        assert!(OMA_ATTRIBUTES.iter().any(|e| e.code_page == 1));
        assert!(NOKIA_ATTRIBUTES.iter().all(|e| e.code_page == 0));
    }
}
