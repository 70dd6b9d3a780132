use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Upload kinds accepted by Device Farm
///
/// Parsing is case-sensitive: the service only accepts the upper-case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadType {
    AndroidApp,
    IosApp,
    WebApp,
    ExternalData,
    AppiumJavaJunitTestPackage,
    AppiumJavaTestngTestPackage,
    AppiumPythonTestPackage,
    AppiumNodeTestPackage,
    AppiumRubyTestPackage,
    AppiumWebJavaJunitTestPackage,
    AppiumWebJavaTestngTestPackage,
    AppiumWebPythonTestPackage,
    AppiumWebNodeTestPackage,
    AppiumWebRubyTestPackage,
    CalabashTestPackage,
    InstrumentationTestPackage,
    UiautomationTestPackage,
    UiautomatorTestPackage,
    XctestTestPackage,
    XctestUiTestPackage,
    AppiumJavaJunitTestSpec,
    AppiumJavaTestngTestSpec,
    AppiumPythonTestSpec,
    AppiumNodeTestSpec,
    AppiumRubyTestSpec,
    AppiumWebJavaJunitTestSpec,
    AppiumWebJavaTestngTestSpec,
    AppiumWebPythonTestSpec,
    AppiumWebNodeTestSpec,
    AppiumWebRubyTestSpec,
    InstrumentationTestSpec,
    XctestUiTestSpec,
}

impl UploadType {
    pub const ALL: [UploadType; 32] = [
        UploadType::AndroidApp,
        UploadType::IosApp,
        UploadType::WebApp,
        UploadType::ExternalData,
        UploadType::AppiumJavaJunitTestPackage,
        UploadType::AppiumJavaTestngTestPackage,
        UploadType::AppiumPythonTestPackage,
        UploadType::AppiumNodeTestPackage,
        UploadType::AppiumRubyTestPackage,
        UploadType::AppiumWebJavaJunitTestPackage,
        UploadType::AppiumWebJavaTestngTestPackage,
        UploadType::AppiumWebPythonTestPackage,
        UploadType::AppiumWebNodeTestPackage,
        UploadType::AppiumWebRubyTestPackage,
        UploadType::CalabashTestPackage,
        UploadType::InstrumentationTestPackage,
        UploadType::UiautomationTestPackage,
        UploadType::UiautomatorTestPackage,
        UploadType::XctestTestPackage,
        UploadType::XctestUiTestPackage,
        UploadType::AppiumJavaJunitTestSpec,
        UploadType::AppiumJavaTestngTestSpec,
        UploadType::AppiumPythonTestSpec,
        UploadType::AppiumNodeTestSpec,
        UploadType::AppiumRubyTestSpec,
        UploadType::AppiumWebJavaJunitTestSpec,
        UploadType::AppiumWebJavaTestngTestSpec,
        UploadType::AppiumWebPythonTestSpec,
        UploadType::AppiumWebNodeTestSpec,
        UploadType::AppiumWebRubyTestSpec,
        UploadType::InstrumentationTestSpec,
        UploadType::XctestUiTestSpec,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadType::AndroidApp => "ANDROID_APP",
            UploadType::IosApp => "IOS_APP",
            UploadType::WebApp => "WEB_APP",
            UploadType::ExternalData => "EXTERNAL_DATA",
            UploadType::AppiumJavaJunitTestPackage => "APPIUM_JAVA_JUNIT_TEST_PACKAGE",
            UploadType::AppiumJavaTestngTestPackage => "APPIUM_JAVA_TESTNG_TEST_PACKAGE",
            UploadType::AppiumPythonTestPackage => "APPIUM_PYTHON_TEST_PACKAGE",
            UploadType::AppiumNodeTestPackage => "APPIUM_NODE_TEST_PACKAGE",
            UploadType::AppiumRubyTestPackage => "APPIUM_RUBY_TEST_PACKAGE",
            UploadType::AppiumWebJavaJunitTestPackage => "APPIUM_WEB_JAVA_JUNIT_TEST_PACKAGE",
            UploadType::AppiumWebJavaTestngTestPackage => "APPIUM_WEB_JAVA_TESTNG_TEST_PACKAGE",
            UploadType::AppiumWebPythonTestPackage => "APPIUM_WEB_PYTHON_TEST_PACKAGE",
            UploadType::AppiumWebNodeTestPackage => "APPIUM_WEB_NODE_TEST_PACKAGE",
            UploadType::AppiumWebRubyTestPackage => "APPIUM_WEB_RUBY_TEST_PACKAGE",
            UploadType::CalabashTestPackage => "CALABASH_TEST_PACKAGE",
            UploadType::InstrumentationTestPackage => "INSTRUMENTATION_TEST_PACKAGE",
            UploadType::UiautomationTestPackage => "UIAUTOMATION_TEST_PACKAGE",
            UploadType::UiautomatorTestPackage => "UIAUTOMATOR_TEST_PACKAGE",
            UploadType::XctestTestPackage => "XCTEST_TEST_PACKAGE",
            UploadType::XctestUiTestPackage => "XCTEST_UI_TEST_PACKAGE",
            UploadType::AppiumJavaJunitTestSpec => "APPIUM_JAVA_JUNIT_TEST_SPEC",
            UploadType::AppiumJavaTestngTestSpec => "APPIUM_JAVA_TESTNG_TEST_SPEC",
            UploadType::AppiumPythonTestSpec => "APPIUM_PYTHON_TEST_SPEC",
            UploadType::AppiumNodeTestSpec => "APPIUM_NODE_TEST_SPEC",
            UploadType::AppiumRubyTestSpec => "APPIUM_RUBY_TEST_SPEC",
            UploadType::AppiumWebJavaJunitTestSpec => "APPIUM_WEB_JAVA_JUNIT_TEST_SPEC",
            UploadType::AppiumWebJavaTestngTestSpec => "APPIUM_WEB_JAVA_TESTNG_TEST_SPEC",
            UploadType::AppiumWebPythonTestSpec => "APPIUM_WEB_PYTHON_TEST_SPEC",
            UploadType::AppiumWebNodeTestSpec => "APPIUM_WEB_NODE_TEST_SPEC",
            UploadType::AppiumWebRubyTestSpec => "APPIUM_WEB_RUBY_TEST_SPEC",
            UploadType::InstrumentationTestSpec => "INSTRUMENTATION_TEST_SPEC",
            UploadType::XctestUiTestSpec => "XCTEST_UI_TEST_SPEC",
        }
    }
}

impl FromStr for UploadType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UploadType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Invalid upload type: {}", s))
    }
}

impl Display for UploadType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
