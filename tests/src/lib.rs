//! End-to-end checks of the scan pipeline against a local authoritative server.


mod scan;
