// crates/dialect-core/src/province/tables.rs

//! Fixed lookup tables for province inference.
//!
//! All tables are ordered association slices. Iteration order decides which
//! entry wins when several match the same text, so entries must not be
//! reordered.

/// Province name stems (administrative suffix removed) → canonical name.
pub const PROVINCE_STEMS: &[(&str, &str)] = &[
    ("北京", "北京市"),
    ("天津", "天津市"),
    ("河北", "河北省"),
    ("山西", "山西省"),
    ("内蒙古", "内蒙古自治区"),
    ("辽宁", "辽宁省"),
    ("吉林", "吉林省"),
    ("黑龙江", "黑龙江省"),
    ("上海", "上海市"),
    ("江苏", "江苏省"),
    ("浙江", "浙江省"),
    ("安徽", "安徽省"),
    ("福建", "福建省"),
    ("江西", "江西省"),
    ("山东", "山东省"),
    ("河南", "河南省"),
    ("湖北", "湖北省"),
    ("湖南", "湖南省"),
    ("广东", "广东省"),
    ("广西", "广西壮族自治区"),
    ("海南", "海南省"),
    ("重庆", "重庆市"),
    ("四川", "四川省"),
    ("贵州", "贵州省"),
    ("云南", "云南省"),
    ("西藏", "西藏自治区"),
    ("陕西", "陕西省"),
    ("甘肃", "甘肃省"),
    ("青海", "青海省"),
    ("宁夏", "宁夏回族自治区"),
    ("新疆", "新疆维吾尔自治区"),
    ("台湾", "台湾省"),
    ("香港", "香港特别行政区"),
    ("澳门", "澳门特别行政区"),
];

/// Traditional single-character abbreviations → canonical name.
pub const PROVINCE_ABBREVIATIONS: &[(char, &str)] = &[
    ('京', "北京市"),
    ('津', "天津市"),
    ('冀', "河北省"),
    ('晋', "山西省"),
    ('蒙', "内蒙古自治区"),
    ('辽', "辽宁省"),
    ('吉', "吉林省"),
    ('黑', "黑龙江省"),
    ('沪', "上海市"),
    ('苏', "江苏省"),
    ('浙', "浙江省"),
    ('皖', "安徽省"),
    ('闽', "福建省"),
    ('赣', "江西省"),
    ('鲁', "山东省"),
    ('豫', "河南省"),
    ('鄂', "湖北省"),
    ('湘', "湖南省"),
    ('粤', "广东省"),
    ('桂', "广西壮族自治区"),
    ('琼', "海南省"),
    ('渝', "重庆市"),
    ('川', "四川省"),
    ('黔', "贵州省"),
    ('滇', "云南省"),
    ('藏', "西藏自治区"),
    ('陕', "陕西省"),
    ('甘', "甘肃省"),
    ('青', "青海省"),
    ('宁', "宁夏回族自治区"),
    ('新', "新疆维吾尔自治区"),
    ('台', "台湾省"),
    ('港', "香港特别行政区"),
    ('澳', "澳门特别行政区"),
];

/// Well-known cities → containing province.
///
/// Best-effort only: many prefecture-level cities (and several provincial
/// capitals) are absent and fall through to the unknown sentinel.
pub const CITY_PROVINCES: &[(&str, &str)] = &[
    ("北京", "北京市"),
    ("上海", "上海市"),
    ("天津", "天津市"),
    ("重庆", "重庆市"),
    ("广州", "广东省"),
    ("深圳", "广东省"),
    ("杭州", "浙江省"),
    ("南京", "江苏省"),
    ("成都", "四川省"),
    ("武汉", "湖北省"),
    ("西安", "陕西省"),
    ("沈阳", "辽宁省"),
    ("绵阳", "四川省"),
    ("温州", "浙江省"),
    ("厦门", "福建省"),
    ("长沙", "湖南省"),
    ("郑州", "河南省"),
    ("济南", "山东省"),
    ("大连", "辽宁省"),
    ("哈尔滨", "黑龙江省"),
    ("昆明", "云南省"),
    ("贵阳", "贵州省"),
    ("石家庄", "河北省"),
    ("合肥", "安徽省"),
    ("福州", "福建省"),
];
