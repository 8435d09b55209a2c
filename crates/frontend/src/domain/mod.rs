pub mod a001_estimator;
