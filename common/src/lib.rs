pub mod subject_observer;
