mod feature_link_policy;

pub use feature_link_policy::FeatureLinkPolicy;
