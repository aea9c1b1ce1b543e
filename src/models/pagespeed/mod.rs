pub mod response;

pub use response::{
    Audit, Categories, Category, LighthouseResult, PagespeedErrorBody, PagespeedErrorDetail,
    PagespeedResponse,
};
