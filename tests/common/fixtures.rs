pub const WML_DOCTYPE_13: &str = r#"<?xml version="1.0"?>
<!DOCTYPE wml PUBLIC "-//WAPFORUM//DTD WML 1.3//EN" "http://www.wapforum.org/DTD/wml13.dtd">
<wml><card/></wml>"#;

/// A deck whose two paragraphs repeat the same word.
pub const WML_REPEATED_TEXT: &str = r#"<wml>
  <card id="c1">
    <p>Delete</p>
    <p>Delete</p>
  </card>
</wml>"#;

pub const WML_UNTERMINATED_VARIABLE: &str = "<wml><card><p>$(</p></card></wml>";

pub const WML_VARIABLE: &str = "<wml><card><p>$x</p></card></wml>";

pub const WML_EMPHASIS: &str = "<wml><card><p>Hello <b>world</b> again</p></card></wml>";

pub const WML_GO: &str = r#"<wml>
  <card>
    <do type="accept">
      <go href="http://www.example.com/next.wml"/>
    </do>
  </card>
</wml>"#;

pub const WML_DUPLICATE_DO: &str = r#"<wml>
  <card>
    <do type="accept" name="a"><prev/></do>
    <do type="prev" name="a"><prev/></do>
  </card>
</wml>"#;

pub const WML_UNKNOWN_ENTITY: &str = "<wml><card><p>&copy;</p></card></wml>";

pub const SI_EMAIL: &str = r#"<?xml version="1.0"?>
<!DOCTYPE si PUBLIC "-//WAPFORUM//DTD SI 1.0//EN" "http://www.wapforum.org/DTD/si.dtd">
<si>
  <indication href="http://www.xyz.com/email/123/abc.wml"
              si-id="123"
              created="1999-06-25T15:23:15Z"
              si-expires="1999-06-30T00:00:00Z"
              action="signal-high">
    You have 4 new emails
  </indication>
</si>"#;

pub const SI_BAD_DATE: &str =
    r#"<si><indication created="yesterday" si-id="7">x</indication></si>"#;

pub const SL_EXECUTE: &str = r#"<?xml version="1.0"?>
<!DOCTYPE sl PUBLIC "-//WAPFORUM//DTD SL 1.0//EN" "http://www.wapforum.org/DTD/sl.dtd">
<sl href="http://www.example.com/ppaid/123/abc.wml" action="execute-high"></sl>"#;

pub const OMA_BOOTSTRAP: &str = r#"<?xml version="1.0"?>
<!DOCTYPE wap-provisioningdoc PUBLIC "-//WAPFORUM//DTD PROV 1.0//EN" "http://www.wapforum.org/DTD/prov.dtd">
<wap-provisioningdoc version="1.0">
  <characteristic type="BOOTSTRAP">
    <parm name="NAME" value="Example"/>
  </characteristic>
  <characteristic type="NAPDEF">
    <parm name="NAP-ADDRESS" value="internet"/>
    <parm name="NAP-ADDRTYPE" value="APN"/>
  </characteristic>
</wap-provisioningdoc>"#;

pub const NOKIA_SETTINGS: &str = r#"<?xml version="1.0"?>
<CHARACTERISTIC-LIST>
  <CHARACTERISTIC TYPE="ADDRESS">
    <PARM NAME="BEARER" VALUE="GSM/CSD"/>
    <PARM NAME="PROXY" VALUE="10.11.12.13"/>
  </CHARACTERISTIC>
</CHARACTERISTIC-LIST>"#;

pub const NOKIA_SYNCSETTINGS: &str = r#"<SYNCSETTINGS>
  <Version>1.0</Version>
  <HostAddr>http://sync.example.com</HostAddr>
</SYNCSETTINGS>"#;

pub const OTA_WITH_CDATA: &str = "<CHARACTERISTIC-LIST><![CDATA[raw]]></CHARACTERISTIC-LIST>";

/// A WML deck with one paragraph per word.
pub fn wml_with_paragraphs(words: &[&str]) -> String {
    let paragraphs: String = words.iter().map(|w| format!("<p>{}</p>", w)).collect();
    format!("<wml><card>{}</card></wml>", paragraphs)
}

/// The same paragraph twice, sent as ISO-8859-1.
pub const WML_LATIN1: &[u8] = b"<wml><card><p>Caf\xE9 menu</p><p>Caf\xE9 menu</p></card></wml>";
