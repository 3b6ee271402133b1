//! Static definitions of the two browsable production tables.
//!
//! Raw column names belong to the MySQL schema; display names are what the
//! grid shows and what exported files use as headers.

use contracts::catalog::{ColumnDef, FilterDef, TableSchema};

pub static DATASET_INDEX: TableSchema = TableSchema {
    id: "dataset_index",
    display_name: "数据集索引",
    primary_key: "image_id",
    columns: &[
        ColumnDef { raw: "image_id", display: "图像ID" },
        ColumnDef { raw: "image_name", display: "图像名称" },
        ColumnDef { raw: "image_height", display: "高度" },
        ColumnDef { raw: "image_width", display: "宽度" },
        ColumnDef { raw: "image_repository", display: "仓库" },
        ColumnDef { raw: "bmp_path", display: "BMP路径" },
        ColumnDef { raw: "yuv_path", display: "YUV路径" },
        ColumnDef { raw: "json_path", display: "JSON路径" },
        ColumnDef { raw: "positive_target", display: "正向目标" },
        ColumnDef { raw: "negative_target", display: "负向目标" },
        ColumnDef { raw: "target_distance", display: "目标距离" },
        ColumnDef { raw: "source", display: "来源" },
    ],
    filters: &[
        FilterDef {
            column: "positive_target",
            allowed: &["行人", "车辆", "建筑", "动物", "基础设施"],
            set_typed: true,
        },
        FilterDef {
            column: "negative_target",
            allowed: &["天空", "植被", "水面", "路面", "背景"],
            set_typed: true,
        },
        FilterDef {
            column: "target_distance",
            allowed: &["10m", "15m", "20m", "25m", "30m"],
            set_typed: false,
        },
    ],
};

pub static TEST_CASES: TableSchema = TableSchema {
    id: "test_cases",
    display_name: "测试用例",
    primary_key: "case_id",
    columns: &[
        ColumnDef { raw: "case_id", display: "用例ID" },
        ColumnDef { raw: "case_name", display: "用例名称" },
        ColumnDef { raw: "case_repository", display: "仓库" },
        ColumnDef { raw: "case_path", display: "路径" },
        ColumnDef { raw: "case_json_path", display: "JSON路径" },
        ColumnDef { raw: "category", display: "类别" },
        ColumnDef { raw: "label", display: "标签" },
        ColumnDef { raw: "framework", display: "框架" },
        ColumnDef { raw: "input_shape", display: "输入形状" },
        ColumnDef { raw: "model_size", display: "模型大小(MB)" },
        ColumnDef { raw: "params", display: "参数量" },
        ColumnDef { raw: "flops", display: "FLOPs" },
        ColumnDef { raw: "sources", display: "来源" },
        ColumnDef { raw: "update_time", display: "更新时间" },
        ColumnDef { raw: "remark", display: "备注" },
    ],
    filters: &[
        FilterDef {
            column: "category",
            allowed: &["单算子", "级联算子", "block块", "模型"],
            set_typed: false,
        },
        FilterDef {
            column: "label",
            allowed: &["depth fusion", "fusion", "M2M", "tiling"],
            set_typed: true,
        },
        FilterDef {
            column: "framework",
            allowed: &["onnx", "caffe", "ir"],
            set_typed: false,
        },
    ],
};
