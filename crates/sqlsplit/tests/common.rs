#![allow(missing_docs)]
#![allow(dead_code)]

pub const SCRIPT: &str = "-- schema setup
CREATE TABLE users (id INT, name VARCHAR(20));
INSERT INTO users VALUES (1, 'semi;colon');
/* bulk load; disabled */
SELECT /*+ INDEX(users idx_name) */ name FROM users WHERE name = \"a;b\";
# trailing note; ignored
SELECT `weird;col` FROM users
";
