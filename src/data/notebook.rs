//! Notebook tab content
//!
//! Static prose describing the analysis notebook, plus the reference
//! pipeline listing. The listing is documentation only; nothing in this
//! crate parses or executes it.

pub const NOTEBOOK_TITLE: &str = "Python Notebook";

pub const NOTEBOOK_INTRO: &str =
    "This application includes a comprehensive Jupyter Notebook with a complete \
     data science solution for predicting payment defaults. The notebook includes:";

pub const NOTEBOOK_CONTENTS: [&str; 7] = [
    "Exploratory data analysis",
    "Data cleaning and preprocessing",
    "Feature engineering",
    "Model training and validation",
    "Model performance evaluation",
    "Optimization techniques",
    "Deployment-ready scoring function",
];

pub const NOTEBOOK_LOCATION: &str =
    "The full Jupyter Notebook can be found in the src/python/payment_default_analysis.ipynb file.";

/// Reference scoring pipeline, reproduced verbatim as documentation.
///
/// The prediction step selects its feature matrix from the fitted model's
/// feature names; the original sample left that input undefined.
pub const PIPELINE_LISTING: &str = r#"# payment_default_model.py
import pandas as pd
import numpy as np
import matplotlib.pyplot as plt
import seaborn as sns
from sklearn.model_selection import train_test_split
from sklearn.ensemble import RandomForestClassifier
from sklearn.metrics import (roc_auc_score, classification_report,
                             confusion_matrix, RocCurveDisplay, roc_curve)
from sklearn.pipeline import Pipeline
import joblib
import warnings

pd.set_option('display.max_columns', 50)
warnings.filterwarnings('ignore')

def load_data(default_path, history_path):
    """Load and validate input datasets"""
    try:
        default_df = pd.read_csv(default_path)
        history_df = pd.read_csv(history_path)

        # Validate required columns
        req_default_cols = ['client_id', 'default', 'credit_given']
        req_history_cols = ['client_id', 'month', 'payment_status', 'bill_amt', 'paid_amt']

        for col in req_default_cols:
            if col not in default_df.columns:
                raise ValueError(f"Missing required column in default data: {col}")

        for col in req_history_cols:
            if col not in history_df.columns:
                raise ValueError(f"Missing required column in history data: {col}")

        print("=== Data Loaded Successfully ===")
        print(f"Default data shape: {default_df.shape}")
        print(f"History data shape: {history_df.shape}")

        return default_df, history_df

    except Exception as e:
        print(f"Error loading data: {str(e)}")
        raise

def create_features(default_df, history_df):
    """Feature engineering and data transformation"""
    try:
        # Clean payment status
        history_df['payment_status'] = np.where(
            history_df['payment_status'] < -1, -1, history_df['payment_status']
        )

        # Sort by client and month for temporal features
        history_df['month'] = pd.to_datetime(history_df['month'], format='%m')
        history_df = history_df.sort_values(['client_id', 'month'])

        # Payment history aggregations
        def safe_division(x):
            bill_amt = history_df.loc[x.index, 'bill_amt']
            mask = bill_amt != 0
            return np.where(mask, x / bill_amt, 0).mean()

        payment_agg = history_df.groupby('client_id').agg(
            max_delay=('payment_status', 'max'),
            avg_delay=('payment_status', 'mean'),
            total_delayed=('payment_status', lambda x: (x >= 1).sum()),
            total_on_time=('payment_status', lambda x: (x == -1).sum()),
            avg_paid_ratio=('paid_amt', safe_division),
            payment_volatility=('payment_status', 'std'),
            payment_trend=('payment_status',
                          lambda x: np.polyfit(np.arange(len(x)), x, 1)[0])
        ).reset_index()

        # Merge datasets
        merged_df = pd.merge(default_df, payment_agg, on='client_id', how='left')

        # Handle missing/infinite values
        merged_df.replace([np.inf, -np.inf], np.nan, inplace=True)
        merged_df.fillna({
            'avg_delay': 0,
            'payment_volatility': 0,
            'avg_paid_ratio': 0,
            'payment_trend': 0
        }, inplace=True)

        # Feature engineering
        merged_df['credit_bins'] = pd.qcut(merged_df['credit_given'], q=4, labels=False)
        merged_df['high_credit_risk'] = ((merged_df['credit_given'] > 200000) &
                                        (merged_df['avg_delay'] > 2)).astype(int)

        return merged_df

    except Exception as e:
        print(f"Error in feature engineering: {str(e)}")
        raise

# Scoring function for deployment
def score_model(default_path, history_path, model_path='default_model.pkl', threshold=0.5):
    """Scoring function for new data"""
    try:
        # Load data and process
        default_df, history_df = load_data(default_path, history_path)
        merged_df = create_features(default_df, history_df)

        # Load model
        model = joblib.load(model_path)

        # Predict on the columns the model was fitted with
        X = merged_df[model.feature_names_in_]
        proba = model.predict_proba(X)[:, 1]
        default_pred = (proba >= threshold).astype(int)

        return pd.DataFrame({
            'client_id': merged_df['client_id'],
            'probability_default': proba,
            'default_indicator': default_pred
        })

    except Exception as e:
        print(f"Error in scoring: {str(e)}")
        raise"#;
