pub mod output;
pub mod traits;

pub use converter::TestConverter;
pub use document::{convert_run, discover_cases, ConvertedRun, ResultRecord, RunDocument};
pub use environment::HostEnvironment;
pub use host::{HostOutcome, HostTestCase, HostTestResult, TestTrait, EXECUTOR_URI, MIN_REPORTED_DURATION};
pub use model::{
    InternalResult, InternalTest, NodeKind, ResultState, TestName, TestNode, TestProperty,
    TestReference,
};
pub use outcome::result_state_to_outcome;
pub use stacks::{FrameworkFrameFilter, StackTraceFilter};
